//! Benchmarks comparing the invert filter's execution strategies.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use crate::filters::invert::{invert_parallel, invert_scalar, invert_simd};

/// Register invert benchmarks with Criterion.
pub fn benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert");

    for size in [512usize, 2048] {
        let mut image = super::synthetic_image(size, size);

        // Inversion is involutive, so repeated in-place passes keep the
        // workload identical across iterations.
        group.bench_function(BenchmarkId::new("scalar", size), |b| {
            b.iter(|| invert_scalar(black_box(&mut image)))
        });
        group.bench_function(BenchmarkId::new("parallel", size), |b| {
            b.iter(|| invert_parallel(black_box(&mut image)))
        });
        group.bench_function(BenchmarkId::new("simd", size), |b| {
            b.iter(|| invert_simd(black_box(&mut image)))
        });
    }

    group.finish();
}
