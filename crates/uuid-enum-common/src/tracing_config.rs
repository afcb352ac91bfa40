//! Tracing configuration for hosts embedding the transformer.
//!
//! Supports three output formats controlled by `UUID_ENUM_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Every enum found, member processed and UUID generated/cached
//! UUID_ENUM_LOG=debug host-build
//!
//! # Every node visited, with its kind and source text preview
//! UUID_ENUM_LOG="uuid_enum_transform=trace" UUID_ENUM_LOG_FORMAT=tree host-build
//! ```
//!
//! Nothing is installed unless `UUID_ENUM_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "UUID_ENUM_LOG";
const LOG_FORMAT_VAR: &str = "UUID_ENUM_LOG_FORMAT";
const FALLBACK_LOG_VAR: &str = "RUST_LOG";

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat text lines.
    #[default]
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Resolved logging settings: which events to keep and how to print them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSettings {
    /// `RUST_LOG`-syntax directives, e.g. `debug` or `uuid_enum_transform=trace`
    pub directives: String,
    pub format: LogFormat,
}

impl TracingSettings {
    /// Settings from the process environment, or `None` when logging is off.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var(LOG_VAR).ok(),
            std::env::var(FALLBACK_LOG_VAR).ok(),
            std::env::var(LOG_FORMAT_VAR).ok(),
        )
    }

    /// `own` (`UUID_ENUM_LOG`) wins over `fallback` (`RUST_LOG`).
    pub fn from_vars(
        own: Option<String>,
        fallback: Option<String>,
        format: Option<String>,
    ) -> Option<Self> {
        let directives = own.or(fallback)?;
        Some(TracingSettings {
            directives,
            format: format.as_deref().map(LogFormat::parse).unwrap_or_default(),
        })
    }

    /// Install a global subscriber for these settings.
    ///
    /// Returns `false` when a subscriber was already installed; the existing
    /// one is kept. Output goes to stderr.
    pub fn install(&self) -> bool {
        let filter = EnvFilter::builder().parse_lossy(&self.directives);
        let registry = Registry::default().with(filter);

        let result = match self.format {
            LogFormat::Tree => registry
                .with(
                    tracing_tree::HierarchicalLayer::default()
                        .with_indent_amount(2)
                        .with_indent_lines(true)
                        .with_targets(true),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Text => registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init(),
        };
        result.is_ok()
    }
}

/// Install the global subscriber described by the environment, if any.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    if let Some(settings) = TracingSettings::from_env() {
        settings.install();
    }
}
