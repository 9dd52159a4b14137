//! Benchmarks for control point assignment and positional lookup.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ctrlgrid::{CpManager, extract_3d, find_index};

/// Benchmark shapes: (label, sizes).
fn bench_shapes() -> Vec<(&'static str, Vec<usize>)> {
    vec![
        ("curve", vec![1024]),
        ("surface", vec![32, 32]),
        ("volume", vec![16, 16, 4]),
    ]
}

/// Spatial points for a grid of `count` cells.
fn points(count: usize) -> Vec<[f64; 3]> {
    (0..count)
        .map(|i| [i as f64, (i * 2) as f64, (i * 3) as f64])
        .collect()
}

/// Benchmark replacing every point at once.
fn bench_set_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_points");

    for (label, size) in bench_shapes() {
        let mut cm = CpManager::new(&size).expect("valid shape");
        let pts = points(cm.count());

        group.bench_function(BenchmarkId::new(label, cm.count()), |b| {
            b.iter(|| cm.set_points(black_box(&pts)))
        });
    }

    group.finish();
}

/// Benchmark reading a point by parametric position.
fn bench_pt(c: &mut Criterion) {
    let mut group = c.benchmark_group("pt");

    for (label, size) in bench_shapes() {
        let mut cm = CpManager::new(&size).expect("valid shape");
        cm.set_points(&points(cm.count())).expect("matching count");
        let mid: Vec<usize> = size.iter().map(|s| s / 2).collect();

        group.bench_function(BenchmarkId::new(label, cm.count()), |b| {
            b.iter(|| cm.pt(black_box(&mid)).map(|p| p[0]))
        });
    }

    group.finish();
}

/// Benchmark the bare index computation.
fn bench_find_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_index");

    for dims in 1..=4 {
        let size = vec![8; dims];
        let coords = vec![5; dims];
        group.bench_function(BenchmarkId::from_parameter(format!("{dims}d")), |b| {
            b.iter(|| find_index(black_box(&size), black_box(&coords)))
        });
    }

    group.finish();
}

/// Benchmark building all three per-direction lists of a volume.
fn bench_extract(c: &mut Criterion) {
    let mut cm = CpManager::new(&[16, 16, 4]).expect("valid shape");
    cm.set_points(&points(cm.count())).expect("matching count");

    c.bench_function("extract_3d", |b| {
        b.iter(|| {
            cm.clear_axis_cache();
            extract_3d(black_box(&mut cm))
        })
    });
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(
        benches,
        bench_set_points,
        bench_pt,
        bench_find_index,
        bench_extract
    );
}

pub use bench_defs::benches;
criterion_main!(benches);
