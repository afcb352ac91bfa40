//! Source text lookups for diagnostics.

use crate::base::NodeIndex;
use crate::node::NodeArena;
use std::borrow::Cow;
use uuid_enum_common::limits::{NODE_TEXT_PREVIEW_CHARS, NO_TEXT_AVAILABLE};

impl NodeArena {
    /// Source text covered by `idx`, read from the source file at `source_file`.
    ///
    /// Returns `None` for synthesized nodes, ranges outside the file, and
    /// ranges that do not fall on character boundaries.
    pub fn node_text(&self, source_file: NodeIndex, idx: NodeIndex) -> Option<&str> {
        let sf_node = self.get(source_file)?;
        let sf = self.get_source_file(sf_node)?;
        let node = self.get(idx)?;
        if node.is_synthesized() || node.end < node.pos {
            return None;
        }
        sf.text.get(node.pos as usize..node.end as usize)
    }

    /// First `NODE_TEXT_PREVIEW_CHARS` characters of the node's text, or the
    /// `NO_TEXT_AVAILABLE` placeholder when the text cannot be read.
    pub fn node_text_preview(&self, source_file: NodeIndex, idx: NodeIndex) -> Cow<'_, str> {
        let Some(text) = self.node_text(source_file, idx) else {
            return Cow::Borrowed(NO_TEXT_AVAILABLE);
        };
        match text.char_indices().nth(NODE_TEXT_PREVIEW_CHARS) {
            Some((cut, _)) => Cow::Borrowed(&text[..cut]),
            None => Cow::Borrowed(text),
        }
    }

    /// File name of a source file root.
    pub fn source_file_name(&self, source_file: NodeIndex) -> Option<&str> {
        let node = self.get(source_file)?;
        self.get_source_file(node)
            .map(|sf| sf.file_name.as_str())
    }
}

#[cfg(test)]
#[path = "../tests/node_text.rs"]
mod tests;
