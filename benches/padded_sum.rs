use criterion::{black_box, Criterion, criterion_group, criterion_main};
use nvec::{Vector, VectorSet, inner_product};

fn bench_padded_sum(c: &mut Criterion) {
    let vectors: Vec<Vector> = (1..=64)
        .map(|n| (0..n * 4).map(|i| (i as f64).sin()).collect())
        .collect();
    let set = VectorSet::from(vectors);

    c.bench_function("padded_sum 64 vectors", |ben| {
        ben.iter(|| black_box(&set).padded_sum())
    });

    c.bench_function("sort + sum 64 vectors", |ben| {
        ben.iter(|| {
            let mut s = set.clone();
            s.sum().unwrap()
        })
    });
}

fn bench_inner_product(c: &mut Criterion) {
    let u: Vector = (0..1024).map(|i| (i as f64).cos()).collect();
    let v: Vector = (0..768).map(|i| (i as f64).sin()).collect();
    c.bench_function("inner_product 1024x768", |ben| {
        ben.iter(|| inner_product(black_box(&u), black_box(&v)))
    });
}

criterion_group!(benches, bench_padded_sum, bench_inner_product);
criterion_main!(benches);
