//! Syntax kinds.
//!
//! Token kinds (identifiers, literals, keywords) live in `SyntaxKind`; node
//! kinds that only the parser produces live in `syntax_kind_ext` as plain
//! `u16` constants. `Node::kind` stores either as a `u16`.

use serde::{Deserialize, Serialize};

/// Token kinds.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown = 0,
    EndOfFileToken = 1,
    NumericLiteral = 9,
    BigIntLiteral = 10,
    StringLiteral = 11,
    RegularExpressionLiteral = 14,
    NoSubstitutionTemplateLiteral = 15,
    Identifier = 80,
    PrivateIdentifier = 81,
    ConstKeyword = 87,
    DefaultKeyword = 90,
    EnumKeyword = 94,
    ExportKeyword = 95,
    FalseKeyword = 97,
    NullKeyword = 106,
    SuperKeyword = 108,
    ThisKeyword = 110,
    TrueKeyword = 112,
    PrivateKeyword = 123,
    ProtectedKeyword = 124,
    PublicKeyword = 125,
    StaticKeyword = 126,
    AbstractKeyword = 128,
    AsyncKeyword = 134,
    DeclareKeyword = 138,
    ReadonlyKeyword = 148,
}

impl SyntaxKind {
    /// Map a raw kind back to a token kind, if it is one.
    pub fn from_u16(kind: u16) -> Option<SyntaxKind> {
        use SyntaxKind::*;
        const TOKENS: &[SyntaxKind] = &[
            Unknown,
            EndOfFileToken,
            NumericLiteral,
            BigIntLiteral,
            StringLiteral,
            RegularExpressionLiteral,
            NoSubstitutionTemplateLiteral,
            Identifier,
            PrivateIdentifier,
            ConstKeyword,
            DefaultKeyword,
            EnumKeyword,
            ExportKeyword,
            FalseKeyword,
            NullKeyword,
            SuperKeyword,
            ThisKeyword,
            TrueKeyword,
            PrivateKeyword,
            ProtectedKeyword,
            PublicKeyword,
            StaticKeyword,
            AbstractKeyword,
            AsyncKeyword,
            DeclareKeyword,
            ReadonlyKeyword,
        ];
        TOKENS.iter().copied().find(|token| *token as u16 == kind)
    }

    /// Whether this token can appear in a declaration's modifier list.
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::ConstKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::AbstractKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::ReadonlyKeyword
        )
    }
}

/// Extended node kinds (everything above the token range).
pub mod syntax_kind_ext {
    pub const QUALIFIED_NAME: u16 = 167;
    pub const COMPUTED_PROPERTY_NAME: u16 = 168;
    pub const PARAMETER: u16 = 170;
    pub const DECORATOR: u16 = 171;
    pub const PROPERTY_DECLARATION: u16 = 173;
    pub const METHOD_DECLARATION: u16 = 175;
    pub const CONSTRUCTOR: u16 = 177;
    pub const TYPE_REFERENCE: u16 = 184;
    pub const ARRAY_LITERAL_EXPRESSION: u16 = 210;
    pub const OBJECT_LITERAL_EXPRESSION: u16 = 211;
    pub const PROPERTY_ACCESS_EXPRESSION: u16 = 212;
    pub const ELEMENT_ACCESS_EXPRESSION: u16 = 213;
    pub const CALL_EXPRESSION: u16 = 214;
    pub const NEW_EXPRESSION: u16 = 215;
    pub const PARENTHESIZED_EXPRESSION: u16 = 218;
    pub const FUNCTION_EXPRESSION: u16 = 219;
    pub const ARROW_FUNCTION: u16 = 220;
    pub const PREFIX_UNARY_EXPRESSION: u16 = 225;
    pub const BINARY_EXPRESSION: u16 = 227;
    pub const CONDITIONAL_EXPRESSION: u16 = 228;
    pub const CLASS_EXPRESSION: u16 = 232;
    pub const BLOCK: u16 = 242;
    pub const VARIABLE_STATEMENT: u16 = 244;
    pub const EXPRESSION_STATEMENT: u16 = 245;
    pub const IF_STATEMENT: u16 = 246;
    pub const RETURN_STATEMENT: u16 = 254;
    pub const VARIABLE_DECLARATION: u16 = 261;
    pub const VARIABLE_DECLARATION_LIST: u16 = 262;
    pub const FUNCTION_DECLARATION: u16 = 263;
    pub const CLASS_DECLARATION: u16 = 264;
    pub const INTERFACE_DECLARATION: u16 = 265;
    pub const TYPE_ALIAS_DECLARATION: u16 = 266;
    pub const ENUM_DECLARATION: u16 = 267;
    pub const MODULE_DECLARATION: u16 = 268;
    pub const MODULE_BLOCK: u16 = 269;
    pub const IMPORT_DECLARATION: u16 = 273;
    pub const EXPORT_ASSIGNMENT: u16 = 278;
    pub const EXPORT_DECLARATION: u16 = 279;
    pub const ENUM_MEMBER: u16 = 307;
    pub const SOURCE_FILE: u16 = 308;
    pub const JSDOC_TYPE_EXPRESSION: u16 = 310;
    pub const JSDOC_ALL_TYPE: u16 = 313;
    pub const JSDOC: u16 = 321;
    pub const JSDOC_TAG: u16 = 328;

    /// First kind value that is a node rather than a token.
    pub const FIRST_NODE: u16 = QUALIFIED_NAME;
}

/// Human-readable name of a raw kind, for diagnostics and tracing.
///
/// Unrecognised kinds render as `"Unknown"`; callers never need to handle a
/// missing name.
pub fn kind_name(kind: u16) -> &'static str {
    use syntax_kind_ext::*;

    if let Some(token) = SyntaxKind::from_u16(kind) {
        return match token {
            SyntaxKind::Unknown => "Unknown",
            SyntaxKind::EndOfFileToken => "EndOfFileToken",
            SyntaxKind::NumericLiteral => "NumericLiteral",
            SyntaxKind::BigIntLiteral => "BigIntLiteral",
            SyntaxKind::StringLiteral => "StringLiteral",
            SyntaxKind::RegularExpressionLiteral => "RegularExpressionLiteral",
            SyntaxKind::NoSubstitutionTemplateLiteral => "NoSubstitutionTemplateLiteral",
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::PrivateIdentifier => "PrivateIdentifier",
            SyntaxKind::ConstKeyword => "ConstKeyword",
            SyntaxKind::DefaultKeyword => "DefaultKeyword",
            SyntaxKind::EnumKeyword => "EnumKeyword",
            SyntaxKind::ExportKeyword => "ExportKeyword",
            SyntaxKind::FalseKeyword => "FalseKeyword",
            SyntaxKind::NullKeyword => "NullKeyword",
            SyntaxKind::SuperKeyword => "SuperKeyword",
            SyntaxKind::ThisKeyword => "ThisKeyword",
            SyntaxKind::TrueKeyword => "TrueKeyword",
            SyntaxKind::PrivateKeyword => "PrivateKeyword",
            SyntaxKind::ProtectedKeyword => "ProtectedKeyword",
            SyntaxKind::PublicKeyword => "PublicKeyword",
            SyntaxKind::StaticKeyword => "StaticKeyword",
            SyntaxKind::AbstractKeyword => "AbstractKeyword",
            SyntaxKind::AsyncKeyword => "AsyncKeyword",
            SyntaxKind::DeclareKeyword => "DeclareKeyword",
            SyntaxKind::ReadonlyKeyword => "ReadonlyKeyword",
        };
    }

    match kind {
        QUALIFIED_NAME => "QualifiedName",
        COMPUTED_PROPERTY_NAME => "ComputedPropertyName",
        PARAMETER => "Parameter",
        DECORATOR => "Decorator",
        PROPERTY_DECLARATION => "PropertyDeclaration",
        METHOD_DECLARATION => "MethodDeclaration",
        CONSTRUCTOR => "Constructor",
        TYPE_REFERENCE => "TypeReference",
        ARRAY_LITERAL_EXPRESSION => "ArrayLiteralExpression",
        OBJECT_LITERAL_EXPRESSION => "ObjectLiteralExpression",
        PROPERTY_ACCESS_EXPRESSION => "PropertyAccessExpression",
        ELEMENT_ACCESS_EXPRESSION => "ElementAccessExpression",
        CALL_EXPRESSION => "CallExpression",
        NEW_EXPRESSION => "NewExpression",
        PARENTHESIZED_EXPRESSION => "ParenthesizedExpression",
        FUNCTION_EXPRESSION => "FunctionExpression",
        ARROW_FUNCTION => "ArrowFunction",
        PREFIX_UNARY_EXPRESSION => "PrefixUnaryExpression",
        BINARY_EXPRESSION => "BinaryExpression",
        CONDITIONAL_EXPRESSION => "ConditionalExpression",
        CLASS_EXPRESSION => "ClassExpression",
        BLOCK => "Block",
        VARIABLE_STATEMENT => "VariableStatement",
        EXPRESSION_STATEMENT => "ExpressionStatement",
        IF_STATEMENT => "IfStatement",
        RETURN_STATEMENT => "ReturnStatement",
        VARIABLE_DECLARATION => "VariableDeclaration",
        VARIABLE_DECLARATION_LIST => "VariableDeclarationList",
        FUNCTION_DECLARATION => "FunctionDeclaration",
        CLASS_DECLARATION => "ClassDeclaration",
        INTERFACE_DECLARATION => "InterfaceDeclaration",
        TYPE_ALIAS_DECLARATION => "TypeAliasDeclaration",
        ENUM_DECLARATION => "EnumDeclaration",
        MODULE_DECLARATION => "ModuleDeclaration",
        MODULE_BLOCK => "ModuleBlock",
        IMPORT_DECLARATION => "ImportDeclaration",
        EXPORT_ASSIGNMENT => "ExportAssignment",
        EXPORT_DECLARATION => "ExportDeclaration",
        ENUM_MEMBER => "EnumMember",
        SOURCE_FILE => "SourceFile",
        JSDOC_TYPE_EXPRESSION => "JSDocTypeExpression",
        JSDOC_ALL_TYPE => "JSDocAllType",
        JSDOC => "JSDoc",
        JSDOC_TAG => "JSDocTag",
        _ => "Unknown",
    }
}

/// JSDoc nodes hang off declarations but are not part of the emitted program.
#[inline]
pub fn is_jsdoc_kind(kind: u16) -> bool {
    use syntax_kind_ext::*;
    matches!(
        kind,
        JSDOC | JSDOC_TAG | JSDOC_ALL_TYPE | JSDOC_TYPE_EXPRESSION
    )
}
