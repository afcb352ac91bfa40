use super::*;
use uuid_enum_ast::builder::{EnumMemberSpec, MemberName, MemberValue, SourceFileBuilder};
use uuid_enum_ast::{EnumMemberData, JsDocData, SyntaxKind};

fn members_of(arena: &NodeArena, enum_idx: NodeIndex) -> Vec<NodeIndex> {
    let node = arena.get(enum_idx).expect("enum node");
    arena.get_enum(node).expect("enum data").members.nodes.clone()
}

fn initializer_text(arena: &NodeArena, member: NodeIndex) -> Option<String> {
    let node = arena.get(member)?;
    let data = arena.get_enum_member(node)?;
    arena.literal_text(data.initializer).map(str::to_owned)
}

fn initializer_kind(arena: &NodeArena, member: NodeIndex) -> Option<u16> {
    let node = arena.get(member)?;
    let data = arena.get_enum_member(node)?;
    arena.kind(data.initializer)
}

fn only_statement(arena: &NodeArena, root: NodeIndex) -> NodeIndex {
    arena.source_file_statements(root).expect("statements")[0]
}

#[test]
fn test_const_enum_members_become_cached_strings() {
    let mut b = SourceFileBuilder::new("color.ts");
    let color = b.enum_declaration(
        &[SyntaxKind::ConstKeyword],
        "Color",
        &[
            EnumMemberSpec::ident("Red"),
            EnumMemberSpec::ident("Green"),
            EnumMemberSpec::ident("Blue"),
        ],
    );
    let (mut arena, root) = b.finish(vec![color]);
    let original_members = members_of(&arena, color);

    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    let new_root = transformer.transform_source_file(&mut arena, root);

    assert_ne!(new_root, root);
    let new_enum = only_statement(&arena, new_root);
    assert_ne!(new_enum, color);
    assert_eq!(arena.enum_name(new_enum), Some("Color"));
    assert!(arena.is_const_enum_declaration(new_enum));

    let new_members = members_of(&arena, new_enum);
    assert_eq!(new_members.len(), 3);
    for (member, expected) in new_members.iter().zip(["Red", "Green", "Blue"]) {
        assert_eq!(arena.enum_member_simple_name(*member), Some(expected));
        assert_eq!(
            initializer_kind(&arena, *member),
            Some(SyntaxKind::StringLiteral as u16)
        );
        let key = cache_key("Color", expected);
        assert_eq!(
            initializer_text(&arena, *member).as_deref(),
            transformer.cache().get(&key)
        );
    }

    // The input tree is untouched.
    assert_eq!(only_statement(&arena, root), color);
    assert_eq!(members_of(&arena, color), original_members);
    for member in original_members {
        assert_eq!(initializer_kind(&arena, member), None);
    }
}

#[test]
fn test_existing_initializers_are_replaced() {
    let mut b = SourceFileBuilder::new("flags.ts");
    let flags = b.enum_declaration(
        &[SyntaxKind::ConstKeyword],
        "Flags",
        &[
            EnumMemberSpec::number("None", "0"),
            EnumMemberSpec::string("Read", "r"),
        ],
    );
    let (mut arena, root) = b.finish(vec![flags]);

    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    let new_root = transformer.transform_source_file(&mut arena, root);
    let members = members_of(&arena, only_statement(&arena, new_root));

    let none = initializer_text(&arena, members[0]).expect("None initializer");
    let read = initializer_text(&arena, members[1]).expect("Read initializer");
    assert_ne!(none, "0");
    assert_ne!(read, "r");
    assert_eq!(transformer.cache().get("Flags_None"), Some(none.as_str()));
    assert_eq!(transformer.cache().get("Flags_Read"), Some(read.as_str()));
}

#[test]
fn test_non_const_enum_is_returned_as_is() {
    let mut b = SourceFileBuilder::new("plain.ts");
    let plain = b.enum_declaration(
        &[SyntaxKind::ExportKeyword],
        "Plain",
        &[EnumMemberSpec::number("A", "1"), EnumMemberSpec::ident("B")],
    );
    let (mut arena, root) = b.finish(vec![plain]);
    let before = arena.len();

    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    let new_root = transformer.transform_source_file(&mut arena, root);

    assert_eq!(new_root, root);
    assert_eq!(arena.len(), before, "nothing should be allocated");
    assert!(transformer.cache().is_empty());
    assert!(transformer.rewrites().is_empty());
}

#[test]
fn test_same_member_name_in_different_enums_gets_different_values() {
    let mut b = SourceFileBuilder::new("two.ts");
    let e1 = b.enum_declaration(&[SyntaxKind::ConstKeyword], "E1", &[EnumMemberSpec::ident("X")]);
    b.end_statement();
    let e2 = b.enum_declaration(&[SyntaxKind::ConstKeyword], "E2", &[EnumMemberSpec::ident("X")]);
    let (mut arena, root) = b.finish(vec![e1, e2]);

    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    let new_root = transformer.transform_source_file(&mut arena, root);
    let statements = arena.source_file_statements(new_root).expect("statements").to_vec();

    let x1 = initializer_text(&arena, members_of(&arena, statements[0])[0]).expect("E1.X");
    let x2 = initializer_text(&arena, members_of(&arena, statements[1])[0]).expect("E2.X");
    assert_ne!(x1, x2);
}

#[test]
fn test_same_enum_twice_in_one_tree_shares_values() {
    let mut b = SourceFileBuilder::new("dup.ts");
    let first = b.enum_declaration(&[SyntaxKind::ConstKeyword], "Dup", &[EnumMemberSpec::ident("A")]);
    b.end_statement();
    let second = b.enum_declaration(&[SyntaxKind::ConstKeyword], "Dup", &[EnumMemberSpec::ident("A")]);
    let (mut arena, root) = b.finish(vec![first, second]);

    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    let new_root = transformer.transform_source_file(&mut arena, root);
    let statements = arena.source_file_statements(new_root).expect("statements").to_vec();

    assert_eq!(
        initializer_text(&arena, members_of(&arena, statements[0])[0]),
        initializer_text(&arena, members_of(&arena, statements[1])[0])
    );
    assert_eq!(transformer.cache().len(), 1);
}

#[test]
fn test_function_and_class_subtrees_are_shared() {
    let mut b = SourceFileBuilder::new("mixed.ts");
    let func = b.function_declaration("area", |b| vec![b.return_statement("0")]);
    b.end_statement();
    let class = b.class_declaration("Point", |b| vec![b.property_declaration("x", "1")]);
    b.end_statement();
    let mode = b.enum_declaration(&[SyntaxKind::ConstKeyword], "Mode", &[EnumMemberSpec::ident("On")]);
    let (mut arena, root) = b.finish(vec![func, class, mode]);

    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    let new_root = transformer.transform_source_file(&mut arena, root);
    let statements = arena.source_file_statements(new_root).expect("statements").to_vec();

    assert_eq!(statements.len(), 3);
    assert_eq!(statements[0], func);
    assert_eq!(statements[1], class);
    assert_ne!(statements[2], mode);
    assert!(arena.same_structure(statements[0], func));
    assert!(!arena.same_structure(statements[2], mode));
}

#[test]
fn test_exported_and_declared_const_enums_are_rewritten() {
    let mut b = SourceFileBuilder::new("mods.ts");
    let exported = b.enum_declaration(
        &[SyntaxKind::ExportKeyword, SyntaxKind::ConstKeyword],
        "Public",
        &[EnumMemberSpec::ident("A")],
    );
    b.end_statement();
    let declared = b.enum_declaration(
        &[SyntaxKind::DeclareKeyword, SyntaxKind::ConstKeyword],
        "Ambient",
        &[EnumMemberSpec::ident("B")],
    );
    let (mut arena, root) = b.finish(vec![exported, declared]);

    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    let new_root = transformer.transform_source_file(&mut arena, root);
    let statements = arena.source_file_statements(new_root).expect("statements").to_vec();

    // Modifiers carry over to the replacement declaration.
    let flags = arena.declaration_modifier_flags(statements[0]);
    assert!(flags.contains(ModifierFlags::EXPORT | ModifierFlags::CONST));
    let flags = arena.declaration_modifier_flags(statements[1]);
    assert!(flags.contains(ModifierFlags::AMBIENT | ModifierFlags::CONST));

    let rewrites = transformer.rewrites();
    assert_eq!(rewrites.len(), 2);
    assert_eq!(rewrites[0].enum_name, "Public");
    assert!(rewrites[0].exported);
    assert_eq!(rewrites[0].file_name.as_deref(), Some("mods.ts"));
    assert_eq!(rewrites[0].original, exported);
    assert_eq!(rewrites[0].rewritten, statements[0]);
    assert_eq!(rewrites[1].enum_name, "Ambient");
    assert!(!rewrites[1].exported);
}

#[test]
fn test_non_identifier_member_names_keep_their_values() {
    let mut b = SourceFileBuilder::new("names.ts");
    let names = b.enum_declaration(
        &[SyntaxKind::ConstKeyword],
        "Names",
        &[
            EnumMemberSpec::ident("Plain"),
            EnumMemberSpec::with_name(MemberName::StringLiteral("with-dash"), MemberValue::Number("1")),
            EnumMemberSpec::with_name(MemberName::Computed("key"), MemberValue::Number("2")),
        ],
    );
    let (mut arena, root) = b.finish(vec![names]);
    let original_members = members_of(&arena, names);

    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    let new_root = transformer.transform_source_file(&mut arena, root);
    let new_members = members_of(&arena, only_statement(&arena, new_root));

    assert_eq!(new_members.len(), 3);
    assert_ne!(new_members[0], original_members[0]);
    assert_eq!(new_members[1], original_members[1]);
    assert_eq!(new_members[2], original_members[2]);
    assert_eq!(initializer_text(&arena, new_members[1]).as_deref(), Some("1"));

    let rewrite = &transformer.rewrites()[0];
    assert_eq!(rewrite.members.len(), 1);
    assert_eq!(rewrite.members[0].key, "Names_Plain");
    assert_eq!(rewrite.skipped_members, 2);
}

#[test]
fn test_const_enum_inside_namespace_is_rewritten() {
    let mut b = SourceFileBuilder::new("ns.ts");
    let mut inner = NodeIndex::NONE;
    let ns = b.namespace_declaration(&[SyntaxKind::ExportKeyword], "Outer", |b| {
        inner = b.enum_declaration(&[SyntaxKind::ConstKeyword], "Inner", &[EnumMemberSpec::ident("A")]);
        b.end_statement();
        vec![inner]
    });
    let (mut arena, root) = b.finish(vec![ns]);

    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    let new_root = transformer.transform_source_file(&mut arena, root);

    let new_ns = only_statement(&arena, new_root);
    assert_ne!(new_ns, ns);
    assert_eq!(arena.original_node(new_ns), ns);
    let module = arena.get(new_ns).and_then(|n| arena.get_module(n)).expect("module");
    let block_children = arena.get_children(module.body);
    assert_eq!(block_children.len(), 1);
    assert_ne!(block_children[0], inner);
    assert!(transformer.cache().get("Inner_A").is_some());
}

#[test]
fn test_jsdoc_is_not_descended() {
    let mut arena = NodeArena::new();
    let const_kw = arena.create_token(SyntaxKind::ConstKeyword as u16);
    let name = arena.create_identifier("Doc");
    let member_name = arena.create_identifier("A");
    let member = arena.add_enum_member(
        0,
        0,
        EnumMemberData {
            name: member_name,
            initializer: NodeIndex::NONE,
        },
    );
    let enum_idx = arena.add_enum(
        0,
        0,
        uuid_enum_ast::EnumData {
            modifiers: Some(NodeList::from_vec(vec![const_kw])),
            name,
            members: NodeList::from_vec(vec![member]),
        },
    );
    let jsdoc = arena.add_jsdoc(
        syntax_kind_ext::JSDOC,
        0,
        0,
        JsDocData {
            comment: "example".to_string(),
            tags: NodeList::from_vec(vec![enum_idx]),
        },
    );
    let root = arena.add_source_file("doc.ts", "", vec![jsdoc]);

    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    let new_root = transformer.transform_source_file(&mut arena, root);

    assert_eq!(new_root, root);
    assert!(transformer.cache().is_empty());
}

#[test]
fn test_deeply_nested_tree_does_not_overflow() {
    const DEPTH: usize = 100_000;

    let mut b = SourceFileBuilder::new("deep.ts");
    let deep = b.enum_declaration(&[SyntaxKind::ConstKeyword], "Deep", &[EnumMemberSpec::ident("A")]);
    let (mut arena, _) = b.finish(Vec::new());

    let mut current = deep;
    for _ in 0..DEPTH {
        current = arena.add_composite(syntax_kind_ext::PARENTHESIZED_EXPRESSION, 0, 0, vec![current]);
    }

    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    let result = transformer.transform_node(&mut arena, current);

    assert_ne!(result, current);
    assert!(transformer.cache().get("Deep_A").is_some());

    let mut walk = result;
    for _ in 0..DEPTH {
        walk = arena.get_children(walk)[0];
    }
    assert_ne!(walk, deep);
    assert_eq!(arena.enum_name(walk), Some("Deep"));
}

#[test]
fn test_transform_node_accepts_missing_node() {
    let mut arena = NodeArena::new();
    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    assert_eq!(
        transformer.transform_node(&mut arena, NodeIndex::NONE),
        NodeIndex::NONE
    );
    assert_eq!(transformer.transform_node(&mut arena, NodeIndex(42)), NodeIndex(42));
}

#[test]
fn test_take_rewrites_drains_records() {
    let mut b = SourceFileBuilder::new("a.ts");
    let e = b.enum_declaration(&[SyntaxKind::ConstKeyword], "E", &[EnumMemberSpec::ident("A")]);
    let (mut arena, root) = b.finish(vec![e]);

    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    transformer.transform_source_file(&mut arena, root);

    assert_eq!(transformer.take_rewrites().len(), 1);
    assert!(transformer.rewrites().is_empty());
}
