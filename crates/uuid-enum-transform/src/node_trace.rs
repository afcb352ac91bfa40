//! Diagnostic pass that reports every node of a source file.
//!
//! For each node it emits a `trace` event with the node's kind and the first
//! `NODE_TEXT_PREVIEW_CHARS` characters of its source text (the
//! `NO_TEXT_AVAILABLE` placeholder for synthesized nodes). The tree is
//! returned unchanged. Hosts run it before or after the rewrite to see what
//! the transformer was given or produced.

use tracing::{debug, trace};
use uuid_enum_ast::{NodeArena, NodeIndex, kind_name};
use uuid_enum_common::limits::REWRITE_STACK_PREALLOC;

/// One visited node, as recorded by a collecting pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    pub idx: NodeIndex,
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct NodeTracePass {
    collect: bool,
    entries: Vec<TraceEntry>,
    visited: usize,
}

impl NodeTracePass {
    /// A pass that only emits trace events.
    pub fn new() -> Self {
        Self::default()
    }

    /// A pass that also keeps every entry for later inspection.
    pub fn collecting() -> Self {
        NodeTracePass {
            collect: true,
            ..Self::default()
        }
    }

    /// Number of nodes visited across every run of this pass.
    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Report every node reachable from `root` in pre-order.
    pub fn transform_source_file(&mut self, arena: &NodeArena, root: NodeIndex) -> NodeIndex {
        let file_name = arena.source_file_name(root).unwrap_or("<unknown>");
        debug!(file = file_name, "processing source file");

        let mut pending = Vec::with_capacity(REWRITE_STACK_PREALLOC);
        pending.push(root);
        while let Some(idx) = pending.pop() {
            let Some(node) = arena.get(idx) else {
                continue;
            };
            let kind = kind_name(node.kind);
            let text = arena.node_text_preview(root, idx);
            trace!(idx = idx.0, kind, text = %text, "node");

            self.visited += 1;
            if self.collect {
                self.entries.push(TraceEntry {
                    idx,
                    kind,
                    text: text.into_owned(),
                });
            }
            pending.extend(arena.get_children(idx).into_iter().rev());
        }

        debug!(file = file_name, "finished processing file");
        root
    }
}

#[cfg(test)]
#[path = "../tests/node_trace.rs"]
mod tests;
