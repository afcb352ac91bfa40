//! Node creation.
//!
//! - `add_*` push nodes with a source range (what a parser produces).
//! - `create_*` push synthesized nodes with no source range.
//! - `update_*` return the input index when nothing differs; otherwise they
//!   push a new node with the same kind and range and link it to the node it
//!   replaces. The input node is never modified.

use crate::base::{NodeIndex, NodeList};
use crate::node::{
    CompositeData, ComputedPropertyData, EnumData, EnumMemberData, ExtendedNodeInfo,
    IdentifierData, JsDocData, LiteralData, ModuleData, Node, NodeArena, SourceFileData,
};
use crate::syntax_kind::{SyntaxKind, syntax_kind_ext};
use std::sync::Arc;

#[inline]
fn push_data<T>(pool: &mut Vec<T>, data: T) -> u32 {
    let data_index = pool.len() as u32;
    pool.push(data);
    data_index
}

impl NodeArena {
    fn push_node(&mut self, node: Node, original: NodeIndex) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo { original });
        NodeIndex(index)
    }

    /// Push a replacement for `original` carrying new data.
    fn push_update(&mut self, original: NodeIndex, template: Node, data_index: u32) -> NodeIndex {
        let node = Node {
            data_index,
            ..template
        };
        self.push_node(node, original)
    }

    // =========================================================================
    // Parsed nodes
    // =========================================================================

    /// Add a token node (keyword, modifier) with no data.
    pub fn add_token(&mut self, kind: u16, pos: u32, end: u32) -> NodeIndex {
        self.push_node(Node::new(kind, pos, end), NodeIndex::NONE)
    }

    pub fn add_identifier(&mut self, text: impl Into<String>, pos: u32, end: u32) -> NodeIndex {
        let data_index = push_data(
            &mut self.identifiers,
            IdentifierData {
                escaped_text: text.into(),
            },
        );
        self.push_node(
            Node::with_data(SyntaxKind::Identifier as u16, pos, end, data_index),
            NodeIndex::NONE,
        )
    }

    /// Add a literal token. `kind` is one of the literal `SyntaxKind`s.
    pub fn add_literal(
        &mut self,
        kind: u16,
        text: impl Into<String>,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data_index = push_data(&mut self.literals, LiteralData { text: text.into() });
        self.push_node(Node::with_data(kind, pos, end, data_index), NodeIndex::NONE)
    }

    /// Add a source file root spanning the whole of `text`.
    pub fn add_source_file(
        &mut self,
        file_name: impl Into<String>,
        text: impl Into<Arc<str>>,
        statements: Vec<NodeIndex>,
    ) -> NodeIndex {
        let text = text.into();
        let end = u32::try_from(text.len()).unwrap_or(Node::NO_POS - 1);
        let data_index = push_data(
            &mut self.source_files,
            SourceFileData {
                file_name: file_name.into(),
                text,
                statements: NodeList::from_vec(statements),
            },
        );
        self.push_node(
            Node::with_data(syntax_kind_ext::SOURCE_FILE, 0, end, data_index),
            NodeIndex::NONE,
        )
    }

    pub fn add_enum(&mut self, pos: u32, end: u32, data: EnumData) -> NodeIndex {
        let data_index = push_data(&mut self.enums, data);
        self.push_node(
            Node::with_data(syntax_kind_ext::ENUM_DECLARATION, pos, end, data_index),
            NodeIndex::NONE,
        )
    }

    pub fn add_enum_member(&mut self, pos: u32, end: u32, data: EnumMemberData) -> NodeIndex {
        let data_index = push_data(&mut self.enum_members, data);
        self.push_node(
            Node::with_data(syntax_kind_ext::ENUM_MEMBER, pos, end, data_index),
            NodeIndex::NONE,
        )
    }

    pub fn add_computed_property(&mut self, pos: u32, end: u32, expression: NodeIndex) -> NodeIndex {
        let data_index = push_data(
            &mut self.computed_properties,
            ComputedPropertyData { expression },
        );
        self.push_node(
            Node::with_data(syntax_kind_ext::COMPUTED_PROPERTY_NAME, pos, end, data_index),
            NodeIndex::NONE,
        )
    }

    pub fn add_module(&mut self, pos: u32, end: u32, data: ModuleData) -> NodeIndex {
        let data_index = push_data(&mut self.modules, data);
        self.push_node(
            Node::with_data(syntax_kind_ext::MODULE_DECLARATION, pos, end, data_index),
            NodeIndex::NONE,
        )
    }

    /// Add a JSDoc node (`JSDOC`, `JSDOC_TAG`, ...).
    pub fn add_jsdoc(&mut self, kind: u16, pos: u32, end: u32, data: JsDocData) -> NodeIndex {
        let data_index = push_data(&mut self.jsdocs, data);
        self.push_node(Node::with_data(kind, pos, end, data_index), NodeIndex::NONE)
    }

    /// Add any other node kind as an ordered child list.
    pub fn add_composite(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        children: Vec<NodeIndex>,
    ) -> NodeIndex {
        let data_index = push_data(
            &mut self.composites,
            CompositeData {
                children: NodeList::from_vec(children),
            },
        );
        self.push_node(Node::with_data(kind, pos, end, data_index), NodeIndex::NONE)
    }

    // =========================================================================
    // Synthesized nodes
    // =========================================================================

    pub fn create_token(&mut self, kind: u16) -> NodeIndex {
        self.add_token(kind, Node::NO_POS, Node::NO_POS)
    }

    pub fn create_identifier(&mut self, text: impl Into<String>) -> NodeIndex {
        self.add_identifier(text, Node::NO_POS, Node::NO_POS)
    }

    pub fn create_string_literal(&mut self, text: impl Into<String>) -> NodeIndex {
        self.add_literal(
            SyntaxKind::StringLiteral as u16,
            text,
            Node::NO_POS,
            Node::NO_POS,
        )
    }

    pub fn create_numeric_literal(&mut self, text: impl Into<String>) -> NodeIndex {
        self.add_literal(
            SyntaxKind::NumericLiteral as u16,
            text,
            Node::NO_POS,
            Node::NO_POS,
        )
    }

    // =========================================================================
    // Updates
    // =========================================================================

    pub fn update_source_file(&mut self, idx: NodeIndex, statements: NodeList) -> NodeIndex {
        let Some(&node) = self.get(idx) else {
            return idx;
        };
        let Some(sf) = self.get_source_file(&node) else {
            return idx;
        };
        if sf.statements == statements {
            return idx;
        }
        let data = SourceFileData {
            file_name: sf.file_name.clone(),
            text: Arc::clone(&sf.text),
            statements,
        };
        let data_index = push_data(&mut self.source_files, data);
        self.push_update(idx, node, data_index)
    }

    pub fn update_enum(
        &mut self,
        idx: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        members: NodeList,
    ) -> NodeIndex {
        let Some(&node) = self.get(idx) else {
            return idx;
        };
        let Some(existing) = self.get_enum(&node) else {
            return idx;
        };
        let data = EnumData {
            modifiers,
            name,
            members,
        };
        if *existing == data {
            return idx;
        }
        let data_index = push_data(&mut self.enums, data);
        self.push_update(idx, node, data_index)
    }

    pub fn update_enum_member(
        &mut self,
        idx: NodeIndex,
        name: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let Some(&node) = self.get(idx) else {
            return idx;
        };
        let Some(existing) = self.get_enum_member(&node) else {
            return idx;
        };
        let data = EnumMemberData { name, initializer };
        if *existing == data {
            return idx;
        }
        let data_index = push_data(&mut self.enum_members, data);
        self.push_update(idx, node, data_index)
    }

    pub fn update_computed_property(&mut self, idx: NodeIndex, expression: NodeIndex) -> NodeIndex {
        let Some(&node) = self.get(idx) else {
            return idx;
        };
        let Some(existing) = self.get_computed_property(&node) else {
            return idx;
        };
        if existing.expression == expression {
            return idx;
        }
        let data_index = push_data(
            &mut self.computed_properties,
            ComputedPropertyData { expression },
        );
        self.push_update(idx, node, data_index)
    }

    pub fn update_module(
        &mut self,
        idx: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        let Some(&node) = self.get(idx) else {
            return idx;
        };
        let Some(existing) = self.get_module(&node) else {
            return idx;
        };
        let data = ModuleData {
            modifiers,
            name,
            body,
        };
        if *existing == data {
            return idx;
        }
        let data_index = push_data(&mut self.modules, data);
        self.push_update(idx, node, data_index)
    }

    pub fn update_jsdoc(&mut self, idx: NodeIndex, tags: NodeList) -> NodeIndex {
        let Some(&node) = self.get(idx) else {
            return idx;
        };
        let Some(existing) = self.get_jsdoc(&node) else {
            return idx;
        };
        if existing.tags == tags {
            return idx;
        }
        let data = JsDocData {
            comment: existing.comment.clone(),
            tags,
        };
        let data_index = push_data(&mut self.jsdocs, data);
        self.push_update(idx, node, data_index)
    }

    pub fn update_composite(&mut self, idx: NodeIndex, children: NodeList) -> NodeIndex {
        let Some(&node) = self.get(idx) else {
            return idx;
        };
        let Some(existing) = self.get_composite(&node) else {
            return idx;
        };
        if existing.children == children {
            return idx;
        }
        let data_index = push_data(&mut self.composites, CompositeData { children });
        self.push_update(idx, node, data_index)
    }
}

#[cfg(test)]
#[path = "../tests/node_factory.rs"]
mod tests;
