//! Benchmark for single-pass parsing across token and declaration counts
//!
//! Run with: cargo bench --bench parse_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand::SeedableRng;

use typarg::Registry;

const SHORTS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'p', 'q',
];

/// Registry cycling through flag, text, integer, floating and list kinds
fn build_registry(n_decls: usize) -> Registry {
    let mut registry = Registry::new();
    for (i, &short) in SHORTS.iter().take(n_decls).enumerate() {
        let long = format!("opt-{}", i);
        let long = Some(long.as_str());
        let declared = match i % 5 {
            0 => registry.flag(short, long),
            1 => registry.text(short, long),
            2 => registry.integer(short, long),
            3 => registry.floating(short, long),
            _ => registry.list(short, long, ["red", "green", "blue"]),
        };
        declared.expect("benchmark declarations are unique");
    }
    registry
}

/// Random token vector mixing references, values and positional noise
fn generate_tokens(n_tokens: usize, n_decls: usize, seed: u64) -> Vec<String> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut tokens = vec!["bench".to_string()];

    while tokens.len() < n_tokens {
        let token = match rng.gen_range(0..5) {
            0 => format!("-{}", SHORTS[rng.gen_range(0..n_decls)]),
            1 => format!("--opt-{}", rng.gen_range(0..n_decls)),
            2 => rng.gen_range(-1000..1000).to_string(),
            3 => ["red", "green", "blue"][rng.gen_range(0..3)].to_string(),
            _ => format!("file_{}.dat", rng.gen::<u16>()),
        };
        tokens.push(token);
    }
    tokens
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for &(n_tokens, n_decls) in &[(16, 4), (256, 8), (4096, 16)] {
        let tokens = generate_tokens(n_tokens, n_decls, 42);
        let template = build_registry(n_decls);

        group.throughput(Throughput::Elements(n_tokens as u64));
        group.bench_with_input(
            BenchmarkId::new("tokens_x_decls", format!("{}x{}", n_tokens, n_decls)),
            &tokens,
            |b, tokens| {
                b.iter(|| {
                    let mut registry = template.clone();
                    registry.parse(black_box(tokens));
                    black_box(registry.positional_tokens().len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
