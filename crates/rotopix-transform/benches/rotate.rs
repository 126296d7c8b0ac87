//! Criterion benchmarks for fixed-point rotation.
//!
//! Measures the sampling scan alone by reusing one preallocated canvas per
//! fixture. Covers size scaling, angle dependence (cache hit rate changes
//! with the angle) and the fixed-point precision.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rotopix_core::{Raster, RasterMut};
use rotopix_transform::{CanvasGeometry, RotateOptions, rotate_into};

const BENCH_SIZES: [u32; 4] = [64, 256, 512, 1024];
const BENCH_ANGLES: [f64; 6] = [0.0, 10.0, 45.0, 90.0, 133.0, 180.0];

fn make_fixture(size: u32) -> (Raster, CanvasGeometry, RasterMut) {
    let pixels = (0..size * size)
        .map(|i| 0xFF00_0000 | (i.wrapping_mul(2_654_435_761) >> 8))
        .collect();
    let source = Raster::from_pixels(size, size, pixels).unwrap();
    let geometry = CanvasGeometry::for_raster(&source).unwrap();
    let canvas = RasterMut::new_filled(geometry.width(), geometry.height(), 0).unwrap();
    (source, geometry, canvas)
}

fn canvas_pixels(geometry: &CanvasGeometry) -> u64 {
    u64::from(geometry.width()) * u64::from(geometry.height())
}

fn bench_size_scaling_45deg(c: &mut Criterion) {
    let mut group = c.benchmark_group("size_scaling_45deg");
    let opts = RotateOptions::default();
    let angle = 45.0_f64.to_radians();
    for size in BENCH_SIZES {
        let (source, geometry, mut canvas) = make_fixture(size);
        group.throughput(Throughput::Elements(canvas_pixels(&geometry)));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                rotate_into(black_box(&source), &geometry, black_box(angle), &opts, &mut canvas)
                    .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_angle_512(c: &mut Criterion) {
    let mut group = c.benchmark_group("angle_512");
    let opts = RotateOptions::default();
    let (source, geometry, mut canvas) = make_fixture(512);
    group.throughput(Throughput::Elements(canvas_pixels(&geometry)));
    for degrees in BENCH_ANGLES {
        let angle = degrees.to_radians();
        group.bench_function(BenchmarkId::from_parameter(degrees as i32), |b| {
            b.iter(|| {
                rotate_into(black_box(&source), &geometry, black_box(angle), &opts, &mut canvas)
                    .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_scale_bits_512(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_bits_512_30deg");
    let (source, geometry, mut canvas) = make_fixture(512);
    let angle = 30.0_f64.to_radians();
    group.throughput(Throughput::Elements(canvas_pixels(&geometry)));
    for bits in [8, 16, 24, 30] {
        let opts = RotateOptions::with_scale_bits(bits);
        group.bench_function(BenchmarkId::from_parameter(bits), |b| {
            b.iter(|| {
                rotate_into(black_box(&source), &geometry, black_box(angle), &opts, &mut canvas)
                    .unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_size_scaling_45deg,
    bench_angle_512,
    bench_scale_bits_512
);
criterion_main!(benches);
