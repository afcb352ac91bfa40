use super::*;
use uuid_enum_ast::SyntaxKind;
use uuid_enum_ast::builder::{EnumMemberSpec, SourceFileBuilder};

fn unit(file_name: &str, enum_name: &str, members: &[&str]) -> CompilationUnit {
    let specs: Vec<_> = members.iter().map(|&m| EnumMemberSpec::ident(m)).collect();
    let mut b = SourceFileBuilder::new(file_name);
    let e = b.enum_declaration(&[SyntaxKind::ConstKeyword], enum_name, &specs);
    let (arena, root) = b.finish(vec![e]);
    CompilationUnit::new(arena, root)
}

#[test]
fn test_units_share_values_through_the_cache() {
    let cache = SharedUuidCache::new();
    let mut units: Vec<_> = (0..16)
        .map(|i| unit(&format!("file{i}.ts"), "Color", &["Red", "Green"]))
        .collect();
    let original_roots: Vec<_> = units.iter().map(|u| u.root).collect();

    let rewrites = transform_units_parallel(&TransformerConfig::default(), &cache, &mut units);

    assert_eq!(cache.len(), 2);
    let red = cache.get("Color_Red").expect("Red resolved");
    let green = cache.get("Color_Green").expect("Green resolved");
    assert_ne!(red, green);

    assert_eq!(rewrites.len(), 16);
    for (i, rewrite) in rewrites.iter().enumerate() {
        let expected_file = format!("file{i}.ts");
        assert_eq!(rewrite.file_name.as_deref(), Some(expected_file.as_str()));
        assert_eq!(rewrite.members[0].value, red);
        assert_eq!(rewrite.members[1].value, green);
    }
    for (unit, original) in units.iter().zip(original_roots) {
        assert_ne!(unit.root, original);
    }
}

#[test]
fn test_units_without_const_enums_are_untouched() {
    let cache = SharedUuidCache::new();
    let mut b = SourceFileBuilder::new("plain.ts");
    let f = b.function_declaration("f", |b| vec![b.return_statement("1")]);
    let (arena, root) = b.finish(vec![f]);
    let mut units = vec![CompilationUnit::new(arena, root), unit("e.ts", "E", &["A"])];

    let rewrites = transform_units_parallel(&TransformerConfig::default(), &cache, &mut units);

    assert_eq!(units[0].root, root);
    assert_eq!(rewrites.len(), 1);
    assert_eq!(rewrites[0].enum_name, "E");
}

#[test]
fn test_no_units() {
    let cache = SharedUuidCache::new();
    let rewrites = transform_units_parallel(&TransformerConfig::default(), &cache, &mut []);
    assert!(rewrites.is_empty());
    assert!(cache.is_empty());
}
