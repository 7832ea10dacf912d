// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use pressmenu_animation::{AnimatableScalar, easing};
use pressmenu_gesture::{ForceCapability, ForcePressRecognizer, GestureConfig, GestureUpdate};

const FRAME: Duration = Duration::from_millis(16);

fn recognizer(capability: ForceCapability) -> ForcePressRecognizer {
    ForcePressRecognizer::new(GestureConfig::default(), capability).unwrap()
}

/// One full force gesture: press, commit, drag for `moves` samples, release,
/// and run the exit animation to completion.
fn force_gesture(rec: &mut ForcePressRecognizer, moves: u32, host: &mut impl FnMut(&GestureUpdate)) {
    let mut now = Duration::ZERO;
    let mut y = 400.0;
    rec.touch_began(1, Point::new(100.0, y), now, host);
    for force in [1.2, 1.8, 2.4, 3.1] {
        now += FRAME;
        rec.touch_moved(Point::new(100.0, y), force, now, host);
    }
    while rec.needs_frames() {
        now += FRAME;
        rec.advance(now, host);
    }
    for _ in 0..moves {
        now += FRAME;
        y -= 1.5;
        rec.touch_moved(Point::new(100.0, y), 0.5, now, host);
    }
    rec.touch_ended(now, host);
    while rec.needs_frames() {
        now += FRAME;
        rec.advance(now, host);
    }
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognizer");

    group.bench_function("force_gesture_120_moves", |b| {
        b.iter_batched(
            || recognizer(ForceCapability::Available),
            |mut rec| {
                let mut updates = 0_usize;
                force_gesture(&mut rec, 120, &mut |_: &GestureUpdate| updates += 1);
                black_box(updates);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("long_press_enter", |b| {
        b.iter_batched(
            || recognizer(ForceCapability::Unavailable),
            |mut rec| {
                let mut host = |update: &GestureUpdate| {
                    black_box(update);
                };
                rec.touch_began(1, Point::ZERO, Duration::ZERO, &mut host);
                let mut now = Duration::ZERO;
                for _ in 0..50 {
                    now += FRAME;
                    rec.advance(now, &mut host);
                }
                black_box(rec.phase());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_scalar(c: &mut Criterion) {
    c.bench_function("scalar/animate_60_frames", |b| {
        b.iter(|| {
            let mut scalar: AnimatableScalar = AnimatableScalar::new(0.0);
            let mut observer = (
                |v: f64| {
                    black_box(v);
                },
                |(): ()| {},
            );
            scalar.animate(
                1.0,
                FRAME * 60,
                easing::cubic_in_out,
                Duration::ZERO,
                (),
                &mut observer,
            );
            let mut now = Duration::ZERO;
            while scalar.is_animating() {
                now += FRAME;
                scalar.advance(now, &mut observer);
            }
            black_box(scalar.value());
        });
    });
}

criterion_group!(benches, bench_gesture, bench_scalar);
criterion_main!(benches);
