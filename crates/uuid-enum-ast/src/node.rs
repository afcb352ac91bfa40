//! Thin node headers and typed data pools.
//!
//! Every node is a 16-byte `Node` header (kind, flags, source range and a
//! data index). Variable-size data lives in per-category pools on
//! `NodeArena`; the node's kind decides which pool `data_index` points into.
//!
//! The arena is append-only. Once a node is pushed its header and data are
//! never modified, which is what lets transforms share unchanged subtrees
//! between an input tree and its rewritten output.

use crate::base::{NodeIndex, NodeList};
use crate::syntax_kind::{SyntaxKind, is_jsdoc_kind, syntax_kind_ext};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A thin 16-byte node header.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// `SyntaxKind` or `syntax_kind_ext` value
    pub kind: u16,
    /// Reserved node flags
    pub flags: u16,
    /// Start of the node's first token in the source text (byte offset)
    pub pos: u32,
    /// End of the node in the source text (byte offset)
    pub end: u32,
    /// Index into the kind's data pool (`u32::MAX` = no data)
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;
    /// Source position of synthesized nodes.
    pub const NO_POS: u32 = u32::MAX;

    #[inline]
    pub fn new(kind: u16, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    #[inline]
    pub fn with_data(kind: u16, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    /// Synthesized nodes were created by a transform and have no source range.
    #[inline]
    pub fn is_synthesized(&self) -> bool {
        self.pos == Self::NO_POS
    }
}

// =============================================================================
// Node Category Classification
// =============================================================================

/// Which data pool a node kind stores its data in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeCategory {
    /// Keywords and punctuation; no data
    Token,
    /// Identifier, PrivateIdentifier
    Identifier,
    /// String, numeric and other literal tokens
    Literal,
    SourceFile,
    Enum,
    EnumMember,
    ComputedProperty,
    Module,
    JsDoc,
    /// Every other node kind: an ordered child list
    Composite,
}

impl NodeCategory {
    pub fn of(kind: u16) -> NodeCategory {
        use syntax_kind_ext::*;

        if kind == SyntaxKind::Identifier as u16 || kind == SyntaxKind::PrivateIdentifier as u16 {
            return NodeCategory::Identifier;
        }
        if kind == SyntaxKind::StringLiteral as u16
            || kind == SyntaxKind::NumericLiteral as u16
            || kind == SyntaxKind::BigIntLiteral as u16
            || kind == SyntaxKind::RegularExpressionLiteral as u16
            || kind == SyntaxKind::NoSubstitutionTemplateLiteral as u16
        {
            return NodeCategory::Literal;
        }
        if is_jsdoc_kind(kind) {
            return NodeCategory::JsDoc;
        }
        match kind {
            SOURCE_FILE => NodeCategory::SourceFile,
            ENUM_DECLARATION => NodeCategory::Enum,
            ENUM_MEMBER => NodeCategory::EnumMember,
            COMPUTED_PROPERTY_NAME => NodeCategory::ComputedProperty,
            MODULE_DECLARATION => NodeCategory::Module,
            k if k >= FIRST_NODE => NodeCategory::Composite,
            _ => NodeCategory::Token,
        }
    }
}

// =============================================================================
// Typed Data Pools
// =============================================================================

/// Data for identifier nodes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// Data for literal tokens. `text` is the cooked value (no quotes).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}

/// Data for the source file root
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFileData {
    pub file_name: String,
    pub text: Arc<str>,
    pub statements: NodeList,
}

/// Data for enum declarations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub members: NodeList,
}

/// Data for enum members
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMemberData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for computed property names: `[expression]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedPropertyData {
    pub expression: NodeIndex,
}

/// Data for module/namespace declarations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub body: NodeIndex,
}

/// Data for JSDoc comments and their tags
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsDocData {
    pub comment: String,
    pub tags: NodeList,
}

/// Data for every other node kind
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeData {
    pub children: NodeList,
}

/// Side-table entry kept for every node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedNodeInfo {
    /// The node this one was produced from by an `update_*` call
    pub original: NodeIndex,
}

impl Default for ExtendedNodeInfo {
    fn default() -> Self {
        ExtendedNodeInfo {
            original: NodeIndex::NONE,
        }
    }
}

// =============================================================================
// NodeArena
// =============================================================================

/// Append-only storage for one or more syntax trees.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub extended_info: Vec<ExtendedNodeInfo>,
    pub identifiers: Vec<IdentifierData>,
    pub literals: Vec<LiteralData>,
    pub source_files: Vec<SourceFileData>,
    pub enums: Vec<EnumData>,
    pub enum_members: Vec<EnumMemberData>,
    pub computed_properties: Vec<ComputedPropertyData>,
    pub modules: Vec<ModuleData>,
    pub jsdocs: Vec<JsDocData>,
    pub composites: Vec<CompositeData>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena with pre-allocated node capacity.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        let safe_capacity = capacity.min(uuid_enum_common::limits::MAX_NODE_PREALLOC);
        NodeArena {
            nodes: Vec::with_capacity(safe_capacity),
            extended_info: Vec::with_capacity(safe_capacity),
            identifiers: Vec::with_capacity(safe_capacity / 4),
            literals: Vec::with_capacity(safe_capacity / 8),
            source_files: Vec::with_capacity(1),
            ..NodeArena::default()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.0 as usize)
    }

    #[inline]
    pub fn kind(&self, idx: NodeIndex) -> Option<u16> {
        self.get(idx).map(|node| node.kind)
    }

    /// The node `idx` was produced from, or `NodeIndex::NONE` for parsed nodes.
    pub fn original_node(&self, idx: NodeIndex) -> NodeIndex {
        if idx.is_none() {
            return NodeIndex::NONE;
        }
        self.extended_info
            .get(idx.0 as usize)
            .map_or(NodeIndex::NONE, |info| info.original)
    }

    /// Follow `original_node` links back to the parsed node.
    pub fn parse_tree_node(&self, idx: NodeIndex) -> NodeIndex {
        let mut current = idx;
        loop {
            let original = self.original_node(current);
            if original.is_none() {
                return current;
            }
            current = original;
        }
    }

    // =========================================================================
    // Typed accessors
    // =========================================================================

    #[inline]
    fn pool_entry<'a, T>(pool: &'a [T], node: &Node, category: NodeCategory) -> Option<&'a T> {
        if node.has_data() && NodeCategory::of(node.kind) == category {
            pool.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        Self::pool_entry(&self.identifiers, node, NodeCategory::Identifier)
    }

    #[inline]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        Self::pool_entry(&self.literals, node, NodeCategory::Literal)
    }

    #[inline]
    pub fn get_source_file(&self, node: &Node) -> Option<&SourceFileData> {
        Self::pool_entry(&self.source_files, node, NodeCategory::SourceFile)
    }

    #[inline]
    pub fn get_enum(&self, node: &Node) -> Option<&EnumData> {
        Self::pool_entry(&self.enums, node, NodeCategory::Enum)
    }

    #[inline]
    pub fn get_enum_member(&self, node: &Node) -> Option<&EnumMemberData> {
        Self::pool_entry(&self.enum_members, node, NodeCategory::EnumMember)
    }

    #[inline]
    pub fn get_computed_property(&self, node: &Node) -> Option<&ComputedPropertyData> {
        Self::pool_entry(
            &self.computed_properties,
            node,
            NodeCategory::ComputedProperty,
        )
    }

    #[inline]
    pub fn get_module(&self, node: &Node) -> Option<&ModuleData> {
        Self::pool_entry(&self.modules, node, NodeCategory::Module)
    }

    #[inline]
    pub fn get_jsdoc(&self, node: &Node) -> Option<&JsDocData> {
        Self::pool_entry(&self.jsdocs, node, NodeCategory::JsDoc)
    }

    #[inline]
    pub fn get_composite(&self, node: &Node) -> Option<&CompositeData> {
        Self::pool_entry(&self.composites, node, NodeCategory::Composite)
    }

    /// Text of an identifier node.
    pub fn identifier_text(&self, idx: NodeIndex) -> Option<&str> {
        let node = self.get(idx)?;
        self.get_identifier(node)
            .map(|ident| ident.escaped_text.as_str())
    }

    /// Cooked text of a literal node.
    pub fn literal_text(&self, idx: NodeIndex) -> Option<&str> {
        let node = self.get(idx)?;
        self.get_literal(node).map(|lit| lit.text.as_str())
    }

    /// Statements of a source file root.
    pub fn source_file_statements(&self, idx: NodeIndex) -> Option<&[NodeIndex]> {
        let node = self.get(idx)?;
        self.get_source_file(node)
            .map(|sf| sf.statements.nodes.as_slice())
    }
}
