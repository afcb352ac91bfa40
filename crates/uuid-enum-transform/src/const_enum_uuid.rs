//! Const Enum UUID Transform
//!
//! Walks a syntax tree and replaces every `const enum` declaration with one
//! whose members are initialized to cache-resolved UUID strings.
//!
//! ```typescript
//! export const enum Status { Idle, Busy = 2, "done" = 3 }
//! ```
//!
//! Becomes:
//!
//! ```typescript
//! export const enum Status {
//!     Idle = "6f1c3a0e-…",
//!     Busy = "d3a9e2b4-…",
//!     "done" = 3
//! }
//! ```
//!
//! # Traversal
//!
//! The walk is depth-first with an explicit work stack, so input depth is
//! limited only by memory. Each node is classified when it is entered:
//!
//! - JSDoc: returned as-is, never descended.
//! - Enum declaration: handled whole by `visit_enum_declaration`. Const
//!   enums get new members; other enums are returned as-is. Enum members
//!   are never visited on their own.
//! - Anything else: children are visited, and the node is rebuilt through
//!   `NodeArena::update_children` only if one of them changed.
//!
//! The input tree is never modified; rewritten nodes are appended to the
//! arena and unchanged subtrees keep their indices.
//!
//! Members whose name is not a plain identifier (string-literal or computed
//! names) keep their original initializer.

use crate::config::TransformerConfig;
use crate::uuid_cache::{IdentifierCache, UuidCache, cache_key};
use tracing::{debug, trace};
use uuid_enum_ast::{
    ModifierFlags, NodeArena, NodeIndex, NodeList, is_jsdoc_kind, kind_name, syntax_kind_ext,
};
use uuid_enum_common::limits::REWRITE_STACK_PREALLOC;

/// One member that received a generated value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberRewrite {
    pub member_name: String,
    pub key: String,
    pub value: String,
}

/// Record of one const enum declaration rewritten by the transformer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstEnumRewrite {
    /// File the declaration was found in, when the walk started at a source file
    pub file_name: Option<String>,
    pub enum_name: String,
    pub exported: bool,
    /// The declaration as it was before rewriting
    pub original: NodeIndex,
    /// The declaration that replaced it
    pub rewritten: NodeIndex,
    pub members: Vec<MemberRewrite>,
    /// Members left untouched because their name is not an identifier
    pub skipped_members: usize,
}

enum Frame {
    Enter(NodeIndex),
    Exit { idx: NodeIndex, child_count: usize },
}

enum Step {
    /// The node's final replacement is known.
    Done(NodeIndex),
    /// Visit these children, then rebuild the node from their results.
    Descend(Vec<NodeIndex>),
}

/// Rewrites const enum members to UUID strings.
///
/// The cache lives as long as the transformer, so every file a transformer
/// processes sees the same value for the same `Enum_Member` key.
pub struct ConstEnumUuidTransformer<C: IdentifierCache = UuidCache> {
    config: TransformerConfig,
    cache: C,
    rewrites: Vec<ConstEnumRewrite>,
    current_file: Option<String>,
}

impl ConstEnumUuidTransformer<UuidCache> {
    /// Create a transformer with a fresh cache.
    pub fn new(config: TransformerConfig) -> Self {
        Self::with_cache(config, UuidCache::new())
    }
}

impl<C: IdentifierCache> ConstEnumUuidTransformer<C> {
    /// Create a transformer that resolves values through `cache`.
    pub fn with_cache(config: TransformerConfig, cache: C) -> Self {
        debug!("const enum UUID transformer initialized");
        ConstEnumUuidTransformer {
            config,
            cache,
            rewrites: Vec::new(),
            current_file: None,
        }
    }

    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn into_cache(self) -> C {
        self.cache
    }

    /// Declarations rewritten so far.
    pub fn rewrites(&self) -> &[ConstEnumRewrite] {
        &self.rewrites
    }

    /// Drain the rewrite records collected so far.
    pub fn take_rewrites(&mut self) -> Vec<ConstEnumRewrite> {
        std::mem::take(&mut self.rewrites)
    }

    /// Rewrite one source file and return the new root.
    pub fn transform_source_file(&mut self, arena: &mut NodeArena, root: NodeIndex) -> NodeIndex {
        let file_name = arena.source_file_name(root).map(str::to_owned);
        debug!(file = file_name.as_deref().unwrap_or("<unknown>"), "processing source file");

        self.current_file = file_name;
        let result = self.transform_node(arena, root);
        let file_name = self.current_file.take();

        debug!(
            file = file_name.as_deref().unwrap_or("<unknown>"),
            changed = result != root,
            "finished processing file"
        );
        result
    }

    /// Rewrite the subtree rooted at `root` and return its replacement.
    pub fn transform_node(&mut self, arena: &mut NodeArena, root: NodeIndex) -> NodeIndex {
        let mut work = Vec::with_capacity(REWRITE_STACK_PREALLOC);
        let mut results: Vec<NodeIndex> = Vec::with_capacity(REWRITE_STACK_PREALLOC);
        work.push(Frame::Enter(root));

        while let Some(frame) = work.pop() {
            match frame {
                Frame::Enter(idx) => match self.visit(arena, idx) {
                    Step::Done(result) => results.push(result),
                    Step::Descend(children) => {
                        work.push(Frame::Exit {
                            idx,
                            child_count: children.len(),
                        });
                        work.extend(children.into_iter().rev().map(Frame::Enter));
                    }
                },
                Frame::Exit { idx, child_count } => {
                    // Children finish in order, so their results are the
                    // last `child_count` entries.
                    let start = results.len() - child_count;
                    let rebuilt = arena.update_children(idx, &results[start..]);
                    results.truncate(start);
                    results.push(rebuilt);
                }
            }
        }

        results.pop().unwrap_or(root)
    }

    fn visit(&mut self, arena: &mut NodeArena, idx: NodeIndex) -> Step {
        let Some(node) = arena.get(idx) else {
            return Step::Done(idx);
        };
        let kind = node.kind;
        trace!(idx = idx.0, kind = kind_name(kind), "visiting node");

        if is_jsdoc_kind(kind) {
            trace!(idx = idx.0, "skipping JSDoc node");
            return Step::Done(idx);
        }

        if kind == syntax_kind_ext::ENUM_DECLARATION {
            return Step::Done(self.visit_enum_declaration(arena, idx));
        }

        let children = arena.get_children(idx);
        if children.is_empty() {
            Step::Done(idx)
        } else {
            Step::Descend(children)
        }
    }

    fn visit_enum_declaration(&mut self, arena: &mut NodeArena, idx: NodeIndex) -> NodeIndex {
        let Some(data) = arena.get(idx).and_then(|node| arena.get_enum(node)).cloned() else {
            return idx;
        };
        let Some(enum_name) = arena.identifier_text(data.name).map(str::to_owned) else {
            debug!(idx = idx.0, "skipping enum without an identifier name");
            return idx;
        };
        debug!(enum_name = %enum_name, "visiting enum declaration");

        let flags = arena.modifier_flags(data.modifiers.as_ref());
        if !flags.contains(ModifierFlags::CONST) {
            debug!(enum_name = %enum_name, "skipping non-const enum");
            return idx;
        }
        let exported = flags.contains(ModifierFlags::EXPORT);
        debug!(enum_name = %enum_name, exported, "processing const enum");

        let mut members = Vec::with_capacity(data.members.len());
        let mut member_rewrites = Vec::with_capacity(data.members.len());
        let mut skipped_members = 0;

        for &member in &data.members.nodes {
            let Some(member_name) = arena.enum_member_simple_name(member).map(str::to_owned) else {
                debug!(
                    enum_name = %enum_name,
                    member = member.0,
                    "keeping member with a non-identifier name"
                );
                skipped_members += 1;
                members.push(member);
                continue;
            };
            let Some(member_name_idx) = arena
                .get(member)
                .and_then(|node| arena.get_enum_member(node))
                .map(|member_data| member_data.name)
            else {
                members.push(member);
                continue;
            };
            debug!(enum_name = %enum_name, member = %member_name, "processing member");

            let key = cache_key(&enum_name, &member_name);
            let value = self.cache.resolve(&key);
            let initializer = arena.create_string_literal(value.clone());
            let updated = arena.update_enum_member(member, member_name_idx, initializer);
            debug!(member = %member_name, uuid = %value, "updated member");

            members.push(updated);
            member_rewrites.push(MemberRewrite {
                member_name,
                key,
                value,
            });
        }

        let rewritten = arena.update_enum(
            idx,
            data.modifiers,
            data.name,
            NodeList::from_vec(members),
        );
        debug!(enum_name = %enum_name, "finished processing const enum");

        self.rewrites.push(ConstEnumRewrite {
            file_name: self.current_file.clone(),
            enum_name,
            exported,
            original: idx,
            rewritten,
            members: member_rewrites,
            skipped_members,
        });
        rewritten
    }
}

#[cfg(test)]
#[path = "../tests/const_enum_uuid.rs"]
mod tests;
