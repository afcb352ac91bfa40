//! Declaration-shape predicates.

use crate::base::{NodeIndex, NodeList};
use crate::flags::ModifierFlags;
use crate::node::NodeArena;
use crate::syntax_kind::{SyntaxKind, syntax_kind_ext};

impl NodeArena {
    /// Combined flags of every modifier token in `modifiers`.
    pub fn modifier_flags(&self, modifiers: Option<&NodeList>) -> ModifierFlags {
        let Some(modifiers) = modifiers else {
            return ModifierFlags::empty();
        };
        modifiers
            .nodes
            .iter()
            .filter_map(|&idx| self.get(idx))
            .fold(ModifierFlags::empty(), |flags, node| {
                flags | ModifierFlags::from_token(node.kind)
            })
    }

    /// Modifier flags of a declaration node; empty for nodes without modifiers.
    pub fn declaration_modifier_flags(&self, idx: NodeIndex) -> ModifierFlags {
        let Some(node) = self.get(idx) else {
            return ModifierFlags::empty();
        };
        if let Some(data) = self.get_enum(node) {
            return self.modifier_flags(data.modifiers.as_ref());
        }
        if let Some(module) = self.get_module(node) {
            return self.modifier_flags(module.modifiers.as_ref());
        }
        ModifierFlags::empty()
    }

    /// `const enum E { ... }` (optionally `export` / `declare`).
    pub fn is_const_enum_declaration(&self, idx: NodeIndex) -> bool {
        self.kind(idx) == Some(syntax_kind_ext::ENUM_DECLARATION)
            && self
                .declaration_modifier_flags(idx)
                .contains(ModifierFlags::CONST)
    }

    /// Name of an enum declaration, when it is a plain identifier.
    pub fn enum_name(&self, idx: NodeIndex) -> Option<&str> {
        let node = self.get(idx)?;
        let data = self.get_enum(node)?;
        self.identifier_text(data.name)
    }

    /// Name of an enum member when it is a simple identifier.
    ///
    /// String-literal names (`"a-b" = 1`), computed names (`[k] = 1`) and
    /// members with no name at all return `None`.
    pub fn enum_member_simple_name(&self, member: NodeIndex) -> Option<&str> {
        let node = self.get(member)?;
        let data = self.get_enum_member(node)?;
        let name_node = self.get(data.name)?;
        if name_node.kind != SyntaxKind::Identifier as u16 {
            return None;
        }
        self.identifier_text(data.name)
    }
}

#[cfg(test)]
#[path = "../tests/modifiers.rs"]
mod tests;
