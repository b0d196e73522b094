//! Benchmarks for the DCT and DWT primitives
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use sf2_core::SubbandTable;
use sf2_transform::{dct, dctbpp, dwt, idct, idwt, nlevdwt, nlevidwt, quantdwt, quantise, regroup};

fn create_test_image(size: usize) -> Array2<f64> {
    Array2::from_shape_fn((size, size), |(r, c)| {
        60.0 * (r as f64 / 9.0).sin() * (c as f64 / 13.0).cos() + ((r * c) % 7) as f64
    })
}

fn bench_dct(c: &mut Criterion) {
    let mut group = c.benchmark_group("Block DCT");
    let x = create_test_image(256);

    for n in [4usize, 8, 16] {
        group.bench_with_input(BenchmarkId::new("dct", n), &n, |b, &n| {
            b.iter(|| dct(black_box(&x), n).unwrap());
        });

        let y = dct(&x, n).unwrap();
        group.bench_with_input(BenchmarkId::new("idct", n), &n, |b, &n| {
            b.iter(|| idct(black_box(&y), n).unwrap());
        });
    }

    let y = quantise(&dct(&x, 8).unwrap(), 17.0);
    group.bench_function("regroup_8", |b| {
        b.iter(|| regroup(black_box(&y), 8).unwrap());
    });

    let yr = regroup(&y, 8).unwrap();
    group.bench_function("dctbpp_8", |b| {
        b.iter(|| dctbpp(black_box(&yr), 8).unwrap());
    });

    group.finish();
}

fn bench_dwt(c: &mut Criterion) {
    let mut group = c.benchmark_group("Wavelet Transform");
    let x = create_test_image(256);

    group.bench_function("dwt_1_level", |b| {
        b.iter(|| dwt(black_box(&x)).unwrap());
    });

    let y = dwt(&x).unwrap();
    group.bench_function("idwt_1_level", |b| {
        b.iter(|| idwt(black_box(&y)).unwrap());
    });

    for levels in [2usize, 4, 6] {
        group.bench_with_input(BenchmarkId::new("nlevdwt", levels), &levels, |b, &levels| {
            b.iter(|| nlevdwt(black_box(&x), levels).unwrap());
        });

        let y = nlevdwt(&x, levels).unwrap();
        group.bench_with_input(BenchmarkId::new("nlevidwt", levels), &levels, |b, &levels| {
            b.iter(|| nlevidwt(black_box(&y), levels).unwrap());
        });
    }

    let y = nlevdwt(&x, 4).unwrap();
    let steps = SubbandTable::uniform(4, 10.0);
    group.bench_function("quantdwt_4", |b| {
        b.iter(|| quantdwt(black_box(&y), &steps).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_dct, bench_dwt);
criterion_main!(benches);
