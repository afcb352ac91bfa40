//! Arena-backed syntax tree for the uuid-enum transformer.
//!
//! The tree is persistent: nodes are never modified after creation. Transforms
//! produce new nodes with the `update_*` factory methods and reuse the indices
//! of every subtree they leave alone.
//!
//! - `base`: `NodeIndex` / `NodeList` handles
//! - `syntax_kind`: token kinds and extended node kinds
//! - `flags`: modifier flags
//! - `node`: the thin node header, typed data pools and `NodeArena`
//! - `node_factory`: `add_*` (parsed), `create_*` (synthesized) and `update_*`
//! - `node_children`: kind-independent child access and reconstruction
//! - `node_text`: source text lookups for diagnostics
//! - `modifiers`: declaration-shape predicates
//! - `builder`: source-backed tree construction for hosts and tests

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod syntax_kind;
pub use syntax_kind::{SyntaxKind, is_jsdoc_kind, kind_name, syntax_kind_ext};

pub mod flags;
pub use flags::ModifierFlags;

pub mod node;
pub use node::{
    CompositeData, ComputedPropertyData, EnumData, EnumMemberData, ExtendedNodeInfo,
    IdentifierData, JsDocData, LiteralData, ModuleData, Node, NodeArena, NodeCategory,
    SourceFileData,
};

pub mod builder;

mod modifiers;
mod node_children;
mod node_factory;
mod node_text;
