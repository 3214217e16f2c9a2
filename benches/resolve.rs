use criterion::{Criterion, criterion_group, criterion_main};
use indaco::{Registry, Variant};

fn resolve_benchmark(c: &mut Criterion) {
    let registry = Registry::builtin().expect("Failed to compile builtin themes");

    c.bench_function("resolve common dark token types", |b| {
        b.iter(|| {
            for token_type in [
                "comment",
                "string",
                "keyword",
                "punctuation",
                "function",
                "unknown-category",
            ] {
                std::hint::black_box(registry.resolve_style(Variant::Dark, token_type));
            }
        })
    });

    c.bench_function("compile builtin themes", |b| {
        b.iter(|| {
            let registry = Registry::builtin().expect("Failed to compile builtin themes");
            std::hint::black_box(registry);
        })
    });
}

criterion_group!(benches, resolve_benchmark);
criterion_main!(benches);
