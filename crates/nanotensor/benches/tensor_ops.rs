// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for tensor operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nanotensor::{
    dequantize, matmul, quantize_symmetric, scaled_dot_product_attention, softmax, Shape, Tensor,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_tensor(rng: &mut StdRng, rows: usize, cols: usize) -> Tensor {
    let values: Vec<f32> = (0..rows * cols).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Tensor::from_f32(Shape::matrix(rows, cols), &values).unwrap()
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    let mut rng = StdRng::seed_from_u64(42);

    for &n in &[32usize, 64, 128] {
        let a = random_tensor(&mut rng, n, n);
        let b = random_tensor(&mut rng, n, n);
        let mut out = Tensor::zeros(Shape::matrix(n, n)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| matmul(&a.view(), &b.view(), black_box(&mut out)).unwrap())
        });
    }
    group.finish();
}

fn bench_softmax(c: &mut Criterion) {
    let mut group = c.benchmark_group("softmax");
    let mut rng = StdRng::seed_from_u64(42);

    for &n in &[64usize, 128, 512] {
        let src = random_tensor(&mut rng, n, n);
        let mut x = Tensor::zeros(Shape::matrix(n, n)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| {
                x.data_mut().copy_from_slice(src.data());
                softmax(black_box(&mut x)).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_attention(c: &mut Criterion) {
    let mut group = c.benchmark_group("attention");
    let mut rng = StdRng::seed_from_u64(42);
    let dim = 64;

    for &seq in &[32usize, 128, 256] {
        let q = random_tensor(&mut rng, seq, dim);
        let k = random_tensor(&mut rng, seq, dim);
        let v = random_tensor(&mut rng, seq, dim);
        let mut out = Tensor::zeros(Shape::matrix(seq, dim)).unwrap();

        group.bench_with_input(BenchmarkId::new("seq", seq), &seq, |bench, _| {
            bench.iter(|| {
                scaled_dot_product_attention(&q.view(), &k.view(), &v.view(), black_box(&mut out))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_quantization(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let x = random_tensor(&mut rng, 128, 64);
    let q = quantize_symmetric(&x.view());

    c.bench_function("quantize_symmetric 128x64", |bench| {
        bench.iter(|| quantize_symmetric(black_box(&x.view())))
    });
    c.bench_function("dequantize 128x64", |bench| {
        bench.iter(|| dequantize(black_box(&q)))
    });
}

criterion_group!(
    benches,
    bench_matmul,
    bench_softmax,
    bench_attention,
    bench_quantization
);
criterion_main!(benches);
