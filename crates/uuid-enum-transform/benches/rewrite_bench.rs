//! Rewrite Benchmark
//!
//! Measures const enum rewriting throughput over synthetic source files.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use uuid_enum_ast::builder::{EnumMemberSpec, SourceFileBuilder};
use uuid_enum_ast::{NodeArena, NodeIndex, SyntaxKind};
use uuid_enum_transform::{
    CompilationUnit, ConstEnumUuidTransformer, SharedUuidCache, TransformerConfig,
    transform_units_parallel,
};

// =============================================================================
// Synthetic Sources
// =============================================================================

/// `enums` const enums of `members` members each, interleaved with functions.
fn generate_source(enums: usize, members: usize) -> (NodeArena, NodeIndex) {
    let member_names: Vec<String> = (0..members).map(|i| format!("Member{i}")).collect();
    let specs: Vec<_> = member_names
        .iter()
        .map(|name| EnumMemberSpec::ident(name))
        .collect();

    let mut b = SourceFileBuilder::new("bench.ts");
    let mut statements = Vec::with_capacity(enums * 2);
    for i in 0..enums {
        statements.push(b.function_declaration(&format!("f{i}"), |b| {
            vec![b.return_statement("0")]
        }));
        b.end_statement();
        statements.push(b.enum_declaration(
            &[SyntaxKind::ExportKeyword, SyntaxKind::ConstKeyword],
            &format!("Enum{i}"),
            &specs,
        ));
        b.end_statement();
    }
    b.finish(statements)
}

/// Benchmark: rewrite a small file with a fresh cache each time
fn bench_rewrite_small(c: &mut Criterion) {
    let (arena, root) = generate_source(1, 3);
    c.bench_function("rewrite_small", |b| {
        b.iter(|| {
            let mut arena = arena.clone();
            let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
            black_box(transformer.transform_source_file(&mut arena, root))
        })
    });
}

/// Benchmark: rewrite throughput for various sizes
fn bench_rewrite_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrite_throughput");

    for (enums, members) in [(10, 5), (50, 10), (200, 10)] {
        let (arena, root) = generate_source(enums, members);
        let label = format!("{enums}enum_{members}member");

        group.throughput(Throughput::Elements((enums * members) as u64));
        group.bench_with_input(BenchmarkId::new("rewrite", &label), &arena, |b, arena| {
            b.iter(|| {
                let mut arena = arena.clone();
                let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
                black_box(transformer.transform_source_file(&mut arena, root))
            })
        });
    }

    group.finish();
}

/// Benchmark: warm cache, so only tree rebuilding is measured
fn bench_rewrite_cached(c: &mut Criterion) {
    let (arena, root) = generate_source(50, 10);
    let mut transformer = ConstEnumUuidTransformer::new(TransformerConfig::default());
    transformer.transform_source_file(&mut arena.clone(), root);

    c.bench_function("rewrite_cached", |b| {
        b.iter(|| {
            let mut arena = arena.clone();
            let result = transformer.transform_source_file(&mut arena, root);
            transformer.take_rewrites();
            black_box(result)
        })
    });
}

/// Benchmark: many files through the parallel driver
fn bench_rewrite_parallel(c: &mut Criterion) {
    let files: Vec<_> = (0..32).map(|_| generate_source(20, 10)).collect();

    c.bench_function("rewrite_parallel_32_files", |b| {
        b.iter(|| {
            let cache = SharedUuidCache::new();
            let mut units: Vec<_> = files
                .iter()
                .map(|(arena, root)| CompilationUnit::new(arena.clone(), *root))
                .collect();
            black_box(transform_units_parallel(
                &TransformerConfig::default(),
                &cache,
                &mut units,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_rewrite_small,
    bench_rewrite_throughput,
    bench_rewrite_cached,
    bench_rewrite_parallel,
);
criterion_main!(benches);
