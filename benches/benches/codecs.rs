//! End-to-end codec benchmarks over a range of step sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array2;
use sf2_codec::{DctCodec, DctOptions, DwtCodec, DwtOptions};

fn create_test_image(size: usize) -> Array2<f64> {
    Array2::from_shape_fn((size, size), |(r, c)| {
        60.0 * (r as f64 / 9.0).sin() * (c as f64 / 13.0).cos() + ((r * c) % 7) as f64
    })
}

fn bench_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("Codecs");
    let x = create_test_image(256);
    group.throughput(Throughput::Elements(x.len() as u64));

    for step in [5u32, 17, 40] {
        let dct_codec = DctCodec::new(DctOptions::new().step(step as f64));
        group.bench_with_input(BenchmarkId::new("dct_codec", step), &step, |b, _| {
            b.iter(|| dct_codec.compress(black_box(&x)).unwrap());
        });

        let dwt_codec = DwtCodec::new(DwtOptions::new().uniform_step(step as f64));
        group.bench_with_input(BenchmarkId::new("dwt_codec", step), &step, |b, _| {
            b.iter(|| dwt_codec.compress(black_box(&x)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codecs);
criterion_main!(benches);
