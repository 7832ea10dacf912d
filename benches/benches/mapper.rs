// Copyright 2026 the Press Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pressmenu_menu::{ForceMenu, MenuListener, ScrollMapping};

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapper/map");
    let mapping = ScrollMapping::default();

    // Drags spanning both overscroll regions and the valid range.
    let drags: Vec<f64> = (-200..=200).map(|i| f64::from(i) * 2.5).collect();
    group.throughput(Throughput::Elements(drags.len() as u64));

    for count in [5_usize, 50, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                for &drag in &drags {
                    black_box(mapping.map(black_box(Some(count / 2)), count, 47.0, drag));
                }
            });
        });
    }
    group.finish();
}

fn bench_menu_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapper/menu_scroll");
    let drags: Vec<f64> = (0..240).map(|i| -f64::from(i)).collect();
    group.throughput(Throughput::Elements(drags.len() as u64));

    group.bench_function("gesture", |b| {
        let mut menu = ForceMenu::new((0..40).collect::<Vec<u32>>());
        menu.select(Some(20));
        b.iter(|| {
            menu.begin();
            for &y in &drags {
                menu.did_scroll(y);
            }
            menu.end(true);
            black_box(menu.offset());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_map, bench_menu_scroll);
criterion_main!(benches);
