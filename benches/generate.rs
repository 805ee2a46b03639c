// Copyright 2026 the circle-points Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of point generation and plot rendering.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use circle_points::{generate, CircleSpec, Plot};

fn bench_generate(cc: &mut Criterion) {
    let mut group = cc.benchmark_group("generate");
    for count in [8, 360, 10_000] {
        group.bench_function(format!("{count} points"), |b| {
            b.iter(|| generate(black_box((1.5, -2.0)), black_box(10.0), black_box(count)));
        });
    }
    group.finish();
}

fn bench_plot(cc: &mut Criterion) {
    let spec = CircleSpec::new((0.0, 0.0), 5.0, 64).unwrap();
    let points = spec.generate();
    cc.bench_function("plot 64 points", |b| {
        b.iter(|| Plot::new(black_box(&spec), black_box(&points)).to_svg(640.0, 480.0));
    });
}

criterion_group!(benches, bench_generate, bench_plot);
criterion_main!(benches);
