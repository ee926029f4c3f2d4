//! Criterion benchmarks for the three triangulation algorithms.
//! Focus sizes: n in {8, 32, 128, 512}.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polytri::geom2::rand::{
    draw_convex, draw_monotone, draw_star, MonotoneCfg, RadialCfg, ReplayToken, VertexCount,
};
use polytri::ring::Ring;
use polytri::triangulate::{Algorithm, Triangulator};

fn radial(n: usize) -> RadialCfg {
    RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        base_radius: 1000.0,
        ..RadialCfg::default()
    }
}

fn bench_run(c: &mut Criterion, group: &str, algo: Algorithm, draw: impl Fn(usize) -> Ring) {
    let mut group = c.benchmark_group(group);
    for &n in &[8usize, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new(algo.name(), n), &n, |b, &n| {
            b.iter_batched(
                || Triangulator::new(draw(n)),
                |mut t| {
                    let _res = t.triangulate(algo).map(|ts| ts.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_triangulate(c: &mut Criterion) {
    let tok = ReplayToken { seed: 43, index: 0 };
    bench_run(c, "star", Algorithm::EarClipping, |n| draw_star(radial(n), tok));
    for algo in Algorithm::ALL {
        bench_run(c, "convex", algo, |n| draw_convex(radial(n), tok));
    }
    let mono = |n: usize| {
        draw_monotone(
            MonotoneCfg {
                vertex_count: VertexCount::Fixed(n),
                ..MonotoneCfg::default()
            },
            tok,
        )
    };
    bench_run(c, "monotone", Algorithm::Monotone, mono);
    bench_run(c, "monotone", Algorithm::EarClipping, mono);
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");
    for &n in &[8usize, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("classify", n), &n, |b, &n| {
            b.iter_batched(
                || draw_star(radial(n), ReplayToken { seed: 44, index: 0 }),
                |mut ring| {
                    let _res = ring.classify();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_triangulate, bench_classify);
criterion_main!(benches);
