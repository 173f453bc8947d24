//! Criterion benchmarks for pentagon detection.
//! Inputs: concentric-ring "onion" drawings whose rings are pentagons, k in {4, 16, 64}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use twoview::embedding::Embedding;
use twoview::pentagon::detect_pentagons;

/// `k` concentric pentagons, consecutive rings joined by radial spokes.
fn onion(k: usize) -> Embedding {
    let mut coords = Vec::with_capacity(5 * k);
    let mut edges = Vec::new();
    for ring in 0..k {
        let r = (ring + 1) as f64;
        for i in 0..5 {
            let th = std::f64::consts::FRAC_PI_2 + std::f64::consts::TAU * (i as f64) / 5.0;
            coords.push(Vector2::new(r * th.cos(), r * th.sin()));
            let v = ring * 5 + i + 1;
            edges.push((v, ring * 5 + (i + 1) % 5 + 1));
            if ring > 0 {
                edges.push((v, v - 5));
            }
        }
    }
    Embedding::from_straight_line(coords, &edges).expect("valid onion")
}

fn bench_pentagons(c: &mut Criterion) {
    let mut group = c.benchmark_group("pentagon");
    for &k in &[4usize, 16, 64] {
        let emb = onion(k);
        group.bench_with_input(BenchmarkId::new("detect_pentagons", k), &emb, |b, emb| {
            b.iter(|| detect_pentagons(emb).expect("consistent rotation"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pentagons);
criterion_main!(benches);
