// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `panzoom_transform`: textual codec and focal zoom.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Rect, Size};
use panzoom_transform::{Bounds, Contain, format_components, parse_transform, to_css, zoom_about};

fn bench_codec(c: &mut Criterion) {
    let inputs = [
        "none",
        "matrix(1.5, 0, 0, 1.5, 12.25, -3)",
        "matrix(0.333333, 0.25, -0.25, 0.333333, -1024.5, 768.125)",
        "1 0 0 1 10 -10",
    ];
    let mut group = c.benchmark_group("codec");
    group.bench_function("parse", |b| {
        b.iter(|| {
            for text in inputs {
                let _ = black_box(parse_transform(black_box(text)));
            }
        });
    });

    let m = Affine::new([1.3, 0.0, 0.0, 1.3, -123.456789, 98.7654321]);
    group.bench_function("format_components", |b| {
        b.iter(|| black_box(format_components(black_box(&m))));
    });
    group.bench_function("to_css", |b| {
        b.iter(|| black_box(to_css(black_box(&m))));
    });
    group.finish();
}

fn bench_math(c: &mut Criterion) {
    let bounds = Bounds::new(Rect::new(40.0, 30.0, 640.0, 480.0), Size::new(800.0, 600.0));
    let m = Affine::new([1.0, 0.0, 0.0, 1.0, 25.0, -40.0]);
    let focal = Point::new(320.0, 240.0);

    let mut group = c.benchmark_group("math");
    group.bench_function("zoom_about", |b| {
        b.iter(|| black_box(zoom_about(black_box(m), 2.5, 2.5, black_box(focal))));
    });
    group.bench_function("contain_inside", |b| {
        let zoomed = zoom_about(m, 2.5, 2.5, focal);
        b.iter(|| black_box(bounds.clamp(Contain::Inside, black_box(zoomed))));
    });
    group.finish();
}

criterion_group!(benches, bench_codec, bench_math);
criterion_main!(benches);
