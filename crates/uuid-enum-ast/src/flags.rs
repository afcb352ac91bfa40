//! Flag sets attached to nodes.

use crate::syntax_kind::SyntaxKind;
use bitflags::bitflags;

bitflags! {
    /// Modifiers collected from a declaration's modifier list.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const EXPORT = 1 << 0;
        const AMBIENT = 1 << 1;
        const PUBLIC = 1 << 2;
        const PRIVATE = 1 << 3;
        const PROTECTED = 1 << 4;
        const STATIC = 1 << 5;
        const READONLY = 1 << 6;
        const ABSTRACT = 1 << 7;
        const ASYNC = 1 << 8;
        const DEFAULT = 1 << 9;
        const CONST = 1 << 11;
    }
}

impl ModifierFlags {
    /// Flag contributed by a single modifier token.
    pub fn from_token(kind: u16) -> ModifierFlags {
        match SyntaxKind::from_u16(kind) {
            Some(SyntaxKind::ExportKeyword) => ModifierFlags::EXPORT,
            Some(SyntaxKind::DeclareKeyword) => ModifierFlags::AMBIENT,
            Some(SyntaxKind::PublicKeyword) => ModifierFlags::PUBLIC,
            Some(SyntaxKind::PrivateKeyword) => ModifierFlags::PRIVATE,
            Some(SyntaxKind::ProtectedKeyword) => ModifierFlags::PROTECTED,
            Some(SyntaxKind::StaticKeyword) => ModifierFlags::STATIC,
            Some(SyntaxKind::ReadonlyKeyword) => ModifierFlags::READONLY,
            Some(SyntaxKind::AbstractKeyword) => ModifierFlags::ABSTRACT,
            Some(SyntaxKind::AsyncKeyword) => ModifierFlags::ASYNC,
            Some(SyntaxKind::DefaultKeyword) => ModifierFlags::DEFAULT,
            Some(SyntaxKind::ConstKeyword) => ModifierFlags::CONST,
            _ => ModifierFlags::empty(),
        }
    }
}
