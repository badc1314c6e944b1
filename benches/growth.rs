// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fit_vec::{FitVec, Growth};

const SIZES: [u32; 3] = [16, 256, 1024];

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("exact", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = FitVec::with_growth(Growth::Exact);
                for i in 0..n {
                    v.push_back(black_box(i));
                }
                v
            })
        });
        group.bench_with_input(BenchmarkId::new("doubling", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = FitVec::with_growth(Growth::Doubling);
                for i in 0..n {
                    v.push_back(black_box(i));
                }
                v
            })
        });
        group.bench_with_input(BenchmarkId::new("std_vec", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..n {
                    v.push(black_box(i));
                }
                v
            })
        });
    }
    group.finish();
}

fn bench_resize_then_add(c: &mut Criterion) {
    c.bench_function("resize_then_add_1024", |b| {
        b.iter(|| {
            let mut v: FitVec<u32> = FitVec::new();
            let _ = v.resize(1024);
            for i in 0..1024 {
                let _ = v.add(black_box(i));
            }
            v
        })
    });
}

fn bench_remove_at_front(c: &mut Criterion) {
    let src: FitVec<u32> = (0..1024).collect();
    c.bench_function("remove_at_front_1024", |b| {
        b.iter(|| {
            let mut v = src.clone();
            while v.remove_at(0).is_some() {}
            v
        })
    });
}

criterion_group!(benches, bench_push_back, bench_resize_then_add, bench_remove_at_front);
criterion_main!(benches);
