// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use vantage_gesture::{GestureConfig, GestureSurface, PointerButton, PointerEvent, WheelEvent};

const SIZE: Size = Size::new(1920.0, 1080.0);
const CENTER: Point = Point::new(960.0, 540.0);
const LEFT: Point = Point::new(800.0, 540.0);
const RIGHT: Point = Point::new(1120.0, 540.0);

fn surface() -> GestureSurface<u32> {
    GestureSurface::new(SIZE, GestureConfig::default()).unwrap()
}

/// A surface with the given contacts pressed.
fn surface_with(contacts: &[Point]) -> GestureSurface<u32> {
    let mut s = surface();
    for (id, &at) in (0_u32..).zip(contacts) {
        s.handle_pointer(PointerEvent::press(id, PointerButton::Primary, at));
    }
    s
}

/// Points along a small circle, so consecutive moves never repeat.
fn wobble(i: usize, center: Point) -> Point {
    let t = i as f64 * 0.05;
    Point::new(center.x + 40.0 * t.cos(), center.y + 40.0 * t.sin())
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/dispatch");

    group.bench_function("pan_1k_moves", |b| {
        b.iter_batched(
            || surface_with(&[CENTER]),
            |mut s| {
                for i in 0..1_000 {
                    let ev = PointerEvent::moved(0, wobble(i, CENTER));
                    black_box(s.handle_pointer(ev));
                }
                s
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("pinch_1k_moves", |b| {
        b.iter_batched(
            || surface_with(&[LEFT, RIGHT]),
            |mut s| {
                for i in 0..1_000 {
                    let (id, center) = if i % 2 == 0 { (0, LEFT) } else { (1, RIGHT) };
                    black_box(s.handle_pointer(PointerEvent::moved(id, wobble(i, center))));
                }
                s
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("wheel_1k", |b| {
        b.iter_batched(
            surface,
            |mut s| {
                for i in 0..1_000 {
                    let scroll = if i % 2 == 0 { -120.0 } else { 100.0 };
                    let ev = WheelEvent::new(wobble(i, Point::new(400.0, 300.0)), scroll);
                    black_box(s.handle_wheel(ev));
                }
                s
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/undo");

    group.bench_function("unwind_256", |b| {
        b.iter_batched(
            || {
                let mut s = surface_with(&[CENTER]);
                for i in 0..256 {
                    s.handle_pointer(PointerEvent::moved(0, wobble(i, CENTER)));
                }
                s
            },
            |mut s| {
                while let Some(d) = s.undo() {
                    black_box(d);
                }
                s
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_undo);
criterion_main!(benches);
