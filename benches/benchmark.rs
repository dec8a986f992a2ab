//! Benchmarks for PixelVeil noise injection.
//!
//! Measures in-place injection throughput across buffer sizes, the cost of
//! the lazy-seed entry point, and how stride affects per-buffer cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pixelveil::{inject_noise, NoiseInjector, SessionSeed};

/// Seed used consistently across all benchmarks.
const BENCH_SEED: u64 = 0xBE4C_44A2_2024_0830;

/// Benchmarks `inject()` throughput across buffer sizes.
///
/// Covers a small icon readback (4 KiB), a typical canvas tile (256 KiB),
/// and a full-screen RGBA surface (8 MiB). Cost should scale with the
/// number of stride positions, not with raw length.
fn bench_inject_sizes(c: &mut Criterion) {
    let injector = NoiseInjector::with_seed(SessionSeed::from_raw(BENCH_SEED));
    let sizes: &[usize] = &[4 << 10, 256 << 10, 8 << 20];

    let mut group = c.benchmark_group("inject_buffer_size");
    for &size in sizes {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut pixels = vec![128u8; size];
            b.iter(|| {
                injector.inject(black_box(&mut pixels));
            });
        });
    }
    group.finish();
}

/// Benchmarks the `inject_noise` entry point, including the (post-first-call
/// cheap) session-seed lookup and per-call generator construction.
fn bench_inject_noise_entry_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("inject_noise_entry_point");
    group.throughput(Throughput::Bytes(256 << 10));

    group.bench_function("256KiB", |b| {
        let mut pixels = vec![128u8; 256 << 10];
        b.iter(|| {
            inject_noise(black_box(&mut pixels));
        });
    });

    group.finish();
}

/// Benchmarks `inject()` across strides on a fixed 1 MiB buffer.
///
/// Shows the cost of denser perturbation (stride 100 visits 10x the
/// positions of the default 1000).
fn bench_inject_stride_scaling(c: &mut Criterion) {
    let strides: &[usize] = &[100, 1000, 10_000];
    let size: usize = 1 << 20;

    let mut group = c.benchmark_group("inject_stride_scaling");
    group.throughput(Throughput::Bytes(size as u64));

    for &stride in strides {
        let injector =
            NoiseInjector::with_params(SessionSeed::from_raw(BENCH_SEED), stride, 2)
                .expect("valid bench parameters");

        group.bench_with_input(BenchmarkId::from_parameter(stride), &stride, |b, _| {
            let mut pixels = vec![128u8; size];
            b.iter(|| {
                injector.inject(black_box(&mut pixels));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_inject_sizes,
    bench_inject_noise_entry_point,
    bench_inject_stride_scaling,
);
criterion_main!(benches);
