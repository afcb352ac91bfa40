//! Common types and utilities for the uuid-enum transformer.
//!
//! This crate provides foundational pieces used across all uuid-enum crates:
//! - Centralized limits and thresholds
//! - Tracing subscriber setup for hosts that want progress output

// Centralized limits and thresholds
pub mod limits;

// Opt-in tracing subscriber (UUID_ENUM_LOG / RUST_LOG)
pub mod tracing_config;
pub use tracing_config::{LogFormat, TracingSettings, init_tracing};
