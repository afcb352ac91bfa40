//! Const enum UUID transformer.
//!
//! Rewrites every `const enum` in a syntax tree so that each member's value is
//! a string literal holding a generated UUID:
//!
//! ```typescript
//! const enum Color { Red, Green }
//! // becomes
//! const enum Color { Red = "0b6c…", Green = "9f1e…" }
//! ```
//!
//! Values come from an [`IdentifierCache`] keyed by `"<Enum>_<Member>"`, so
//! the same member always receives the same value for as long as the cache
//! lives. Everything outside const enum declarations is passed through, with
//! unchanged subtrees shared between the input and output trees.

pub mod config;
pub use config::{ConfigError, TransformerConfig};

pub mod uuid_cache;
pub use uuid_cache::{IdentifierCache, SharedUuidCache, UuidCache, cache_key};

pub mod const_enum_uuid;
pub use const_enum_uuid::{ConstEnumRewrite, ConstEnumUuidTransformer, MemberRewrite};

pub mod node_trace;
pub use node_trace::{NodeTracePass, TraceEntry};

pub mod parallel;
pub use parallel::{CompilationUnit, transform_units_parallel};
