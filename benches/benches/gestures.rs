// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for gesture-driven updates through `PanZoom`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use panzoom::{Contain, EventKinds, HeadlessHost, Options, PanZoom};

fn controller(contain: Contain, listeners: usize) -> PanZoom<HeadlessHost> {
    let host = HeadlessHost::new(Rect::new(40.0, 30.0, 640.0, 480.0), Size::new(800.0, 600.0));
    let mut pz = PanZoom::new(host, Options::default().with_contain(contain));
    for _ in 0..listeners {
        pz.on(EventKinds::all(), |event| {
            black_box(event.matrix());
        });
    }
    pz
}

/// A drag path of `steps` pointer positions.
fn drag_path(steps: usize) -> Vec<Point> {
    (0..steps)
        .map(|i| {
            let t = i as f64;
            Point::new(100.0 + t * 3.0, 100.0 + t * 1.5)
        })
        .collect()
}

/// A pinch path spreading two pointers apart around a drifting midpoint.
fn pinch_path(steps: usize) -> Vec<[Point; 2]> {
    (0..steps)
        .map(|i| {
            let t = i as f64;
            let mid = Point::new(300.0 + t, 200.0 - t * 0.5);
            let half = 20.0 + t * 0.75;
            [
                Point::new(mid.x - half, mid.y),
                Point::new(mid.x + half, mid.y),
            ]
        })
        .collect()
}

fn bench_drag(c: &mut Criterion) {
    let path = drag_path(256);
    let mut group = c.benchmark_group("drag");
    for (name, contain) in [
        ("none", Contain::None),
        ("inside", Contain::Inside),
        ("invert", Contain::Invert),
    ] {
        group.bench_function(BenchmarkId::new("contain", name), |b| {
            b.iter_batched(
                || controller(contain, 0),
                |mut pz| {
                    pz.start_move(&path[..1]);
                    for p in &path[1..] {
                        pz.move_to(core::slice::from_ref(p));
                    }
                    pz.end_move();
                    black_box(pz.matrix())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    let path = pinch_path(256);
    let mut group = c.benchmark_group("pinch");
    for listeners in [0_usize, 4, 16] {
        group.bench_function(BenchmarkId::new("listeners", listeners), |b| {
            b.iter_batched(
                || controller(Contain::Inside, listeners),
                |mut pz| {
                    pz.start_move(&path[0]);
                    for points in &path[1..] {
                        pz.move_to(points);
                    }
                    pz.end_move();
                    black_box(pz.matrix())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drag, bench_pinch);
criterion_main!(benches);
