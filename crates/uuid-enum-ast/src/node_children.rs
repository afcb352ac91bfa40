//! Kind-independent child access.
//!
//! `get_children` and `update_children` walk the same slots in the same
//! order for every category, so a transform can map over a node's children
//! without knowing its kind and rebuild it only when a child changed.
//! Absent optional children (`NodeIndex::NONE`, missing modifier lists) are
//! not reported and are left absent on update.

use crate::base::{NodeIndex, NodeList};
use crate::node::{NodeArena, NodeCategory};

fn push_list(out: &mut Vec<NodeIndex>, list: &NodeList) {
    out.extend(list.nodes.iter().copied().filter(|idx| idx.is_some()));
}

fn push_opt_list(out: &mut Vec<NodeIndex>, list: Option<&NodeList>) {
    if let Some(list) = list {
        push_list(out, list);
    }
}

fn push_opt(out: &mut Vec<NodeIndex>, idx: NodeIndex) {
    if idx.is_some() {
        out.push(idx);
    }
}

/// Hands out replacement children in slot order.
struct SlotFiller<'a> {
    replacements: std::slice::Iter<'a, NodeIndex>,
}

impl SlotFiller<'_> {
    fn fill(&mut self, original: NodeIndex) -> NodeIndex {
        if original.is_none() {
            return original;
        }
        self.replacements.next().copied().unwrap_or(original)
    }

    fn fill_list(&mut self, list: &NodeList) -> NodeList {
        NodeList::from_vec(list.nodes.iter().map(|&idx| self.fill(idx)).collect())
    }

    fn fill_opt_list(&mut self, list: Option<&NodeList>) -> Option<NodeList> {
        list.map(|list| self.fill_list(list))
    }
}

impl NodeArena {
    /// Present children of `idx`, in source order.
    pub fn get_children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let Some(node) = self.get(idx) else {
            return Vec::new();
        };

        let mut children = Vec::new();
        match NodeCategory::of(node.kind) {
            NodeCategory::Token | NodeCategory::Identifier | NodeCategory::Literal => {}
            NodeCategory::SourceFile => {
                if let Some(sf) = self.get_source_file(node) {
                    push_list(&mut children, &sf.statements);
                }
            }
            NodeCategory::Enum => {
                if let Some(data) = self.get_enum(node) {
                    push_opt_list(&mut children, data.modifiers.as_ref());
                    push_opt(&mut children, data.name);
                    push_list(&mut children, &data.members);
                }
            }
            NodeCategory::EnumMember => {
                if let Some(member) = self.get_enum_member(node) {
                    push_opt(&mut children, member.name);
                    push_opt(&mut children, member.initializer);
                }
            }
            NodeCategory::ComputedProperty => {
                if let Some(computed) = self.get_computed_property(node) {
                    push_opt(&mut children, computed.expression);
                }
            }
            NodeCategory::Module => {
                if let Some(module) = self.get_module(node) {
                    push_opt_list(&mut children, module.modifiers.as_ref());
                    push_opt(&mut children, module.name);
                    push_opt(&mut children, module.body);
                }
            }
            NodeCategory::JsDoc => {
                if let Some(jsdoc) = self.get_jsdoc(node) {
                    push_list(&mut children, &jsdoc.tags);
                }
            }
            NodeCategory::Composite => {
                if let Some(composite) = self.get_composite(node) {
                    push_list(&mut children, &composite.children);
                }
            }
        }
        children
    }

    /// Rebuild `idx` with `children` substituted slot-for-slot.
    ///
    /// `children` must line up with `get_children(idx)`. Returns `idx` itself
    /// when every child is unchanged or when the lists do not line up.
    pub fn update_children(&mut self, idx: NodeIndex, children: &[NodeIndex]) -> NodeIndex {
        let current = self.get_children(idx);
        if current.as_slice() == children {
            return idx;
        }
        if current.len() != children.len() {
            tracing::warn!(
                node = idx.0,
                expected = current.len(),
                actual = children.len(),
                "update_children: child count mismatch, keeping original node"
            );
            return idx;
        }

        let Some(&node) = self.get(idx) else {
            return idx;
        };
        let mut filler = SlotFiller {
            replacements: children.iter(),
        };

        match NodeCategory::of(node.kind) {
            NodeCategory::Token | NodeCategory::Identifier | NodeCategory::Literal => idx,
            NodeCategory::SourceFile => {
                let Some(sf) = self.get_source_file(&node) else {
                    return idx;
                };
                let statements = filler.fill_list(&sf.statements);
                self.update_source_file(idx, statements)
            }
            NodeCategory::Enum => {
                let Some(data) = self.get_enum(&node) else {
                    return idx;
                };
                let modifiers = filler.fill_opt_list(data.modifiers.as_ref());
                let name = filler.fill(data.name);
                let members = filler.fill_list(&data.members);
                self.update_enum(idx, modifiers, name, members)
            }
            NodeCategory::EnumMember => {
                let Some(member) = self.get_enum_member(&node) else {
                    return idx;
                };
                let name = filler.fill(member.name);
                let initializer = filler.fill(member.initializer);
                self.update_enum_member(idx, name, initializer)
            }
            NodeCategory::ComputedProperty => {
                let Some(computed) = self.get_computed_property(&node) else {
                    return idx;
                };
                let expression = filler.fill(computed.expression);
                self.update_computed_property(idx, expression)
            }
            NodeCategory::Module => {
                let Some(module) = self.get_module(&node) else {
                    return idx;
                };
                let modifiers = filler.fill_opt_list(module.modifiers.as_ref());
                let name = filler.fill(module.name);
                let body = filler.fill(module.body);
                self.update_module(idx, modifiers, name, body)
            }
            NodeCategory::JsDoc => {
                let Some(jsdoc) = self.get_jsdoc(&node) else {
                    return idx;
                };
                let tags = filler.fill_list(&jsdoc.tags);
                self.update_jsdoc(idx, tags)
            }
            NodeCategory::Composite => {
                let Some(composite) = self.get_composite(&node) else {
                    return idx;
                };
                let children = filler.fill_list(&composite.children);
                self.update_composite(idx, children)
            }
        }
    }

    /// Structural equality of two subtrees, ignoring source ranges and
    /// original-node links. Either side may live anywhere in this arena.
    pub fn same_structure(&self, left: NodeIndex, right: NodeIndex) -> bool {
        let mut pending = vec![(left, right)];
        while let Some((a, b)) = pending.pop() {
            if a == b {
                continue;
            }
            let (Some(node_a), Some(node_b)) = (self.get(a), self.get(b)) else {
                return false;
            };
            if node_a.kind != node_b.kind || !self.same_leaf_data(node_a.kind, a, b) {
                return false;
            }
            let children_a = self.get_children(a);
            let children_b = self.get_children(b);
            if children_a.len() != children_b.len() {
                return false;
            }
            pending.extend(children_a.into_iter().zip(children_b));
        }
        true
    }

    /// Compare the non-child payload of two nodes of the same kind.
    fn same_leaf_data(&self, kind: u16, a: NodeIndex, b: NodeIndex) -> bool {
        match NodeCategory::of(kind) {
            NodeCategory::Identifier => self.identifier_text(a) == self.identifier_text(b),
            NodeCategory::Literal => self.literal_text(a) == self.literal_text(b),
            NodeCategory::JsDoc => {
                let comment = |idx: NodeIndex| {
                    self.get(idx)
                        .and_then(|node| self.get_jsdoc(node))
                        .map(|jsdoc| jsdoc.comment.as_str())
                };
                comment(a) == comment(b)
            }
            NodeCategory::Enum => {
                // Modifiers and name are children, but a declaration with
                // and without a modifier list must not compare equal.
                let has_modifiers = |idx: NodeIndex| {
                    self.get(idx)
                        .and_then(|node| self.get_enum(node))
                        .map(|data| data.modifiers.is_some())
                };
                has_modifiers(a) == has_modifiers(b)
            }
            _ => true,
        }
    }
}

#[cfg(test)]
#[path = "../tests/node_children.rs"]
mod tests;
