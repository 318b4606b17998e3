use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tsformer::layers::PositionalEncoding;
use tsformer::positional::sinusoid_table;
use tsformer::tensor::Tensor;

fn bench_positional(c: &mut Criterion) {
    c.bench_function("sinusoid_table_512x64", |bencher| {
        bencher.iter(|| {
            let table = sinusoid_table(black_box(512), black_box(64));
            black_box(table);
        });
    });

    let x = Tensor::new(vec![1.0; 8 * 128 * 64], vec![8, 128, 64]);
    let layer = PositionalEncoding::new(512);
    c.bench_function("positional_encode_8x128x64", |bencher| {
        bencher.iter(|| {
            let enc = layer.encode(black_box(&x), true);
            black_box(enc);
        });
    });
}

criterion_group!(benches, bench_positional);
criterion_main!(benches);
