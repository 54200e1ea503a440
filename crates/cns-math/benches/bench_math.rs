use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use cns_math::{dot, normalize, transpose, Matrix3D, Vector3D};

fn bench_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("Vector3D");

    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = Vector3D::new(-3.0, 2.0, -1.0);

    group.bench_function("add", |bencher| {
        bencher.iter(|| black_box(black_box(a) + black_box(b)))
    });

    group.bench_function("dot", |bencher| {
        bencher.iter(|| black_box(dot(black_box(&a), black_box(&b))))
    });

    group.bench_function("normalize", |bencher| {
        bencher.iter(|| black_box(normalize(black_box(&a))))
    });

    group.finish();
}

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("Matrix3D");

    let m1 = Matrix3D::from_cols_array(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    let m2 = transpose(&m1);
    let v = Vector3D::new(1.0, 2.0, 3.0);

    group.bench_function("mul_vec", |bencher| {
        bencher.iter(|| black_box(black_box(m1) * black_box(v)))
    });

    group.bench_function("mul_mat", |bencher| {
        bencher.iter(|| black_box(black_box(m1) * black_box(m2)))
    });

    group.bench_function("transpose", |bencher| {
        bencher.iter(|| black_box(transpose(black_box(&m1))))
    });

    group.finish();
}

criterion_group!(benches, bench_vector, bench_matrix);
criterion_main!(benches);
