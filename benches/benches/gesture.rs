// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use std::time::Duration;
use understory_gesture::{GestureState, InputSample};

/// Tap, drag, hold, pinch: one contact lifecycle of each, 16ms apart.
fn scripted_ticks(contacts: &[Point; 2]) -> Vec<InputSample<'_>> {
    let mut t = 0_u64;
    let mut next = |pos: Point| {
        t += 16;
        InputSample::at(Duration::from_millis(t), pos)
    };
    let mut ticks = Vec::new();

    ticks.push(next(Point::new(10.0, 10.0)).with_primary_down());
    ticks.push(next(Point::new(10.0, 10.0)).with_primary_up());

    ticks.push(next(Point::ZERO).with_primary_down());
    for i in 0..30 {
        ticks.push(next(Point::new(f64::from(i) * 2.0, 0.0)));
    }
    ticks.push(next(Point::new(60.0, 0.0)).with_primary_up());

    ticks.push(next(Point::ZERO).with_primary_down());
    for _ in 0..40 {
        ticks.push(next(Point::ZERO));
    }
    ticks.push(next(Point::ZERO).with_primary_up());

    ticks.push(next(Point::ZERO).with_primary_down().with_contacts(contacts));
    for _ in 0..30 {
        ticks.push(next(Point::ZERO).with_contacts(contacts));
    }
    ticks.push(next(Point::ZERO).with_primary_up().with_contacts(contacts));
    ticks
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/advance");

    let contacts = [Point::new(0.0, 0.0), Point::new(40.0, 30.0)];
    let ticks = scripted_ticks(&contacts);
    group.throughput(Throughput::Elements(ticks.len() as u64));

    group.bench_with_input(BenchmarkId::new("in_place", ticks.len()), &ticks, |b, ticks| {
        b.iter_batched(
            GestureState::new,
            |mut state| {
                for tick in ticks {
                    state.advance(tick);
                }
                black_box(state);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_with_input(BenchmarkId::new("advanced", ticks.len()), &ticks, |b, ticks| {
        b.iter(|| {
            let state = ticks
                .iter()
                .fold(GestureState::new(), |state, tick| state.advanced(tick));
            black_box(state);
        });
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut state = GestureState::new();
    state.advance(&InputSample::at(Duration::ZERO, Point::ZERO).with_primary_down());
    state.advance(&InputSample::at(Duration::from_millis(16), Point::new(5.0, 0.0)));

    c.bench_function("gesture/interacted", |b| {
        b.iter(|| black_box(&state).interacted());
    });
}

criterion_group!(benches, bench_advance, bench_queries);
criterion_main!(benches);
