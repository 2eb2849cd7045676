use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use kugo_core::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let tiers = [
        ("smallest", BoardConfig::new_unchecked(3, 3, 3)),
        ("default", BoardConfig::default()),
        ("largest-dense", BoardConfig::new_unchecked(15, 15, 75)),
    ];

    for (name, config) in tiers {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(RandomBoardGenerator::new(seed).generate(config))
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let grid = RandomBoardGenerator::new(1)
        .generate(BoardConfig::new_unchecked(15, 15, 75))
        .expect("config fits the board");

    c.bench_function("render/largest", |b| b.iter(|| black_box(render(&grid))));
}

criterion_group!(benches, bench_generate, bench_render);
criterion_main!(benches);
