//! Benchmarks comparing the median filter's execution strategies.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use crate::filters::median::{median_parallel, median_scalar};

/// Register median benchmarks with Criterion.
pub fn benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");
    group.sample_size(10);

    let size = 512usize;
    for diameter in [3usize, 7, 15] {
        let mut image = super::synthetic_image(size, size);

        group.bench_function(BenchmarkId::new("scalar", format!("d{diameter}")), |b| {
            b.iter(|| median_scalar(black_box(&mut image), diameter).unwrap())
        });
        group.bench_function(BenchmarkId::new("parallel", format!("d{diameter}")), |b| {
            b.iter(|| median_parallel(black_box(&mut image), diameter).unwrap())
        });
    }

    group.finish();
}
