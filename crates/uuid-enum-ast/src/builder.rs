//! Source-backed tree builder.
//!
//! Parsing is the host's job; this builder is for hosts and tests that need a
//! tree whose nodes carry real source ranges without running a parser. Each
//! call appends the node's text to the file and records its range, so the
//! finished source file reads back as the TypeScript it describes:
//!
//! ```
//! use uuid_enum_ast::SyntaxKind;
//! use uuid_enum_ast::builder::{EnumMemberSpec, SourceFileBuilder};
//!
//! let mut b = SourceFileBuilder::new("color.ts");
//! let color = b.enum_declaration(
//!     &[SyntaxKind::ConstKeyword],
//!     "Color",
//!     &[EnumMemberSpec::ident("Red"), EnumMemberSpec::ident("Green")],
//! );
//! let (arena, root) = b.finish(vec![color]);
//! assert_eq!(arena.node_text(root, color), Some("const enum Color { Red, Green }"));
//! ```

use crate::base::{NodeIndex, NodeList};
use crate::node::{EnumData, EnumMemberData, JsDocData, ModuleData, NodeArena};
use crate::syntax_kind::{SyntaxKind, syntax_kind_ext};

/// Name of an enum member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberName<'a> {
    /// `Red`
    Identifier(&'a str),
    /// `"red-value"`
    StringLiteral(&'a str),
    /// `[key]`, where `key` is an identifier expression
    Computed(&'a str),
}

/// Initializer of an enum member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberValue<'a> {
    None,
    Number(&'a str),
    String(&'a str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumMemberSpec<'a> {
    pub name: MemberName<'a>,
    pub value: MemberValue<'a>,
}

impl<'a> EnumMemberSpec<'a> {
    pub fn ident(name: &'a str) -> Self {
        EnumMemberSpec {
            name: MemberName::Identifier(name),
            value: MemberValue::None,
        }
    }

    pub fn number(name: &'a str, value: &'a str) -> Self {
        EnumMemberSpec {
            name: MemberName::Identifier(name),
            value: MemberValue::Number(value),
        }
    }

    pub fn string(name: &'a str, value: &'a str) -> Self {
        EnumMemberSpec {
            name: MemberName::Identifier(name),
            value: MemberValue::String(value),
        }
    }

    pub fn with_name(name: MemberName<'a>, value: MemberValue<'a>) -> Self {
        EnumMemberSpec { name, value }
    }
}

fn keyword_text(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::ConstKeyword => "const",
        SyntaxKind::DefaultKeyword => "default",
        SyntaxKind::ExportKeyword => "export",
        SyntaxKind::DeclareKeyword => "declare",
        SyntaxKind::PublicKeyword => "public",
        SyntaxKind::PrivateKeyword => "private",
        SyntaxKind::ProtectedKeyword => "protected",
        SyntaxKind::StaticKeyword => "static",
        SyntaxKind::ReadonlyKeyword => "readonly",
        SyntaxKind::AbstractKeyword => "abstract",
        SyntaxKind::AsyncKeyword => "async",
        _ => "",
    }
}

/// Builds one source file's text and tree together.
pub struct SourceFileBuilder {
    arena: NodeArena,
    file_name: String,
    text: String,
}

impl SourceFileBuilder {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self::with_arena(NodeArena::new(), file_name)
    }

    /// Build into an existing arena (e.g. to hold several files).
    pub fn with_arena(arena: NodeArena, file_name: impl Into<String>) -> Self {
        SourceFileBuilder {
            arena,
            file_name: file_name.into(),
            text: String::new(),
        }
    }

    fn offset(&self) -> u32 {
        self.text.len() as u32
    }

    /// Append `text` after a separating space and return its range.
    fn write(&mut self, text: &str) -> (u32, u32) {
        if !self.text.is_empty() && !self.text.ends_with([' ', '\n']) {
            self.text.push(' ');
        }
        let pos = self.offset();
        self.text.push_str(text);
        (pos, self.offset())
    }

    /// Append raw punctuation with no separating space.
    fn write_raw(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn newline(&mut self) {
        self.text.push('\n');
    }

    pub fn identifier(&mut self, name: &str) -> NodeIndex {
        let (pos, end) = self.write(name);
        self.arena.add_identifier(name, pos, end)
    }

    pub fn keyword(&mut self, kind: SyntaxKind) -> NodeIndex {
        let (pos, end) = self.write(keyword_text(kind));
        self.arena.add_token(kind as u16, pos, end)
    }

    pub fn numeric_literal(&mut self, value: &str) -> NodeIndex {
        let (pos, end) = self.write(value);
        self.arena
            .add_literal(SyntaxKind::NumericLiteral as u16, value, pos, end)
    }

    pub fn string_literal(&mut self, value: &str) -> NodeIndex {
        let (pos, end) = self.write(&format!("\"{value}\""));
        self.arena
            .add_literal(SyntaxKind::StringLiteral as u16, value, pos, end)
    }

    fn modifier_list(&mut self, modifiers: &[SyntaxKind]) -> Option<NodeList> {
        if modifiers.is_empty() {
            return None;
        }
        let nodes = modifiers.iter().map(|&kind| self.keyword(kind)).collect();
        Some(NodeList::from_vec(nodes))
    }

    fn enum_member(&mut self, spec: &EnumMemberSpec<'_>) -> NodeIndex {
        let name = match spec.name {
            MemberName::Identifier(text) => self.identifier(text),
            MemberName::StringLiteral(text) => self.string_literal(text),
            MemberName::Computed(key) => {
                let (pos, _) = self.write("[");
                let key_pos = self.offset();
                self.write_raw(key);
                let key_end = self.offset();
                let expression = self.arena.add_identifier(key, key_pos, key_end);
                self.write_raw("]");
                let end = self.offset();
                self.arena.add_computed_property(pos, end, expression)
            }
        };
        let pos = self.arena.get(name).map_or(self.offset(), |node| node.pos);
        let initializer = match spec.value {
            MemberValue::None => NodeIndex::NONE,
            MemberValue::Number(value) => {
                self.write("=");
                self.numeric_literal(value)
            }
            MemberValue::String(value) => {
                self.write("=");
                self.string_literal(value)
            }
        };
        let end = self.offset();
        self.arena
            .add_enum_member(pos, end, EnumMemberData { name, initializer })
    }

    /// `<modifiers> enum <name> { <members> }`
    pub fn enum_declaration(
        &mut self,
        modifiers: &[SyntaxKind],
        name: &str,
        members: &[EnumMemberSpec<'_>],
    ) -> NodeIndex {
        let start = self.write("").0;
        let modifiers = self.modifier_list(modifiers);
        self.write("enum");
        let name = self.identifier(name);
        self.write("{");
        let mut member_nodes = Vec::with_capacity(members.len());
        for (i, spec) in members.iter().enumerate() {
            if i > 0 {
                self.write_raw(",");
            }
            member_nodes.push(self.enum_member(spec));
        }
        self.write("}");
        let end = self.offset();
        self.arena.add_enum(
            start,
            end,
            EnumData {
                modifiers,
                name,
                members: NodeList::from_vec(member_nodes),
            },
        )
    }

    fn braced_body<F>(&mut self, body: F) -> Vec<NodeIndex>
    where
        F: FnOnce(&mut Self) -> Vec<NodeIndex>,
    {
        self.write("{");
        self.newline();
        let statements = body(self);
        if !self.text.ends_with('\n') {
            self.newline();
        }
        self.write("}");
        statements
    }

    /// `function <name>() { <body> }`
    pub fn function_declaration<F>(&mut self, name: &str, body: F) -> NodeIndex
    where
        F: FnOnce(&mut Self) -> Vec<NodeIndex>,
    {
        let start = self.write("function").0;
        let name = self.identifier(name);
        self.write_raw("()");
        let block_start = self.offset() + 1;
        let statements = self.braced_body(body);
        let end = self.offset();
        let block = self
            .arena
            .add_composite(syntax_kind_ext::BLOCK, block_start, end, statements);
        self.arena.add_composite(
            syntax_kind_ext::FUNCTION_DECLARATION,
            start,
            end,
            vec![name, block],
        )
    }

    /// `class <name> { <members> }`
    pub fn class_declaration<F>(&mut self, name: &str, members: F) -> NodeIndex
    where
        F: FnOnce(&mut Self) -> Vec<NodeIndex>,
    {
        let start = self.write("class").0;
        let name = self.identifier(name);
        let members = self.braced_body(members);
        let end = self.offset();
        let mut children = vec![name];
        children.extend(members);
        self.arena
            .add_composite(syntax_kind_ext::CLASS_DECLARATION, start, end, children)
    }

    /// `<name> = <value>;` as a class property declaration.
    pub fn property_declaration(&mut self, name: &str, value: &str) -> NodeIndex {
        let name_idx = self.identifier(name);
        let start = self.arena.get(name_idx).map_or(0, |node| node.pos);
        self.write("=");
        let value = self.numeric_literal(value);
        self.write_raw(";");
        let end = self.offset();
        self.newline();
        self.arena.add_composite(
            syntax_kind_ext::PROPERTY_DECLARATION,
            start,
            end,
            vec![name_idx, value],
        )
    }

    /// `return <value>;`
    pub fn return_statement(&mut self, value: &str) -> NodeIndex {
        let start = self.write("return").0;
        let value = self.numeric_literal(value);
        self.write_raw(";");
        let end = self.offset();
        self.newline();
        self.arena
            .add_composite(syntax_kind_ext::RETURN_STATEMENT, start, end, vec![value])
    }

    /// `<modifiers> namespace <name> { <statements> }`
    pub fn namespace_declaration<F>(
        &mut self,
        modifiers: &[SyntaxKind],
        name: &str,
        body: F,
    ) -> NodeIndex
    where
        F: FnOnce(&mut Self) -> Vec<NodeIndex>,
    {
        let start = self.write("").0;
        let modifiers = self.modifier_list(modifiers);
        self.write("namespace");
        let name = self.identifier(name);
        let block_start = self.offset() + 1;
        let statements = self.braced_body(body);
        let end = self.offset();
        let body = self
            .arena
            .add_composite(syntax_kind_ext::MODULE_BLOCK, block_start, end, statements);
        self.arena.add_module(
            start,
            end,
            ModuleData {
                modifiers,
                name,
                body,
            },
        )
    }

    /// `/** <comment> */`
    pub fn jsdoc(&mut self, comment: &str) -> NodeIndex {
        let (pos, end) = self.write(&format!("/** {comment} */"));
        self.newline();
        self.arena.add_jsdoc(
            syntax_kind_ext::JSDOC,
            pos,
            end,
            JsDocData {
                comment: comment.to_string(),
                tags: NodeList::new(),
            },
        )
    }

    /// End the current statement's line.
    pub fn end_statement(&mut self) {
        self.newline();
    }

    /// Wrap `statements` in a source file root and hand back the arena.
    pub fn finish(mut self, statements: Vec<NodeIndex>) -> (NodeArena, NodeIndex) {
        let root = self
            .arena
            .add_source_file(self.file_name, self.text, statements);
        (self.arena, root)
    }
}

#[cfg(test)]
#[path = "../tests/builder.rs"]
mod tests;
