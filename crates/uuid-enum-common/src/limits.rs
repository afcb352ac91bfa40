//! Centralized limits and thresholds for the transformer.
//!
//! Keeping these values in one place avoids duplicate definitions with
//! inconsistent values across the AST and transform crates.

// =============================================================================
// Capacity Limits
// =============================================================================

/// Maximum number of node slots pre-allocated by `NodeArena::with_capacity`.
///
/// A caller may ask for a capacity derived from a file size estimate; huge
/// inputs are capped here so the pre-allocation never overflows. The arena
/// still grows past this value on demand.
pub const MAX_NODE_PREALLOC: usize = 5_000_000;

/// Initial capacity of the explicit work stack used by tree rewriters.
///
/// Typical source files nest well below this; deeper trees simply grow the
/// stack, so this is a performance hint rather than a depth limit.
pub const REWRITE_STACK_PREALLOC: usize = 64;

// =============================================================================
// Diagnostic Limits
// =============================================================================

/// Number of characters of node source text included in trace output.
///
/// ```typescript
/// // A 4KB function body is logged as its first 100 characters:
/// function render() { /* ... */ }
/// ```
pub const NODE_TEXT_PREVIEW_CHARS: usize = 100;

/// Placeholder used when a node has no readable source text.
///
/// Synthesized nodes (created by a transform rather than the parser) have no
/// source range, and a range that does not land on valid text is treated the
/// same way. The placeholder only ever appears in diagnostic output.
pub const NO_TEXT_AVAILABLE: &str = "<no text available>";
