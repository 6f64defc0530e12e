// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `cellview_color`.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use cellview_color::{ColorRamp, HeatMap, SpectrumMode};

fn bench_heat_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("heat_map/heat_color");
    let values: Vec<f64> = (0..10_000).map(|i| f64::from(i) * 0.37).collect();
    group.throughput(Throughput::Elements(values.len() as u64));

    for (name, mode) in [
        ("linear", SpectrumMode::Linear),
        ("log", SpectrumMode::Log),
        ("exp", SpectrumMode::Exp),
    ] {
        let heat = HeatMap::new(mode, ColorRamp::Rainbow);
        group.bench_function(name, |b| {
            b.iter(|| {
                for v in &values {
                    black_box(heat.heat_color(*v, 0.0, 3_700.0));
                }
            });
        });
    }

    group.finish();
}

fn bench_legend_image(c: &mut Criterion) {
    let heat = HeatMap::default();
    c.bench_function("heat_map/legend_image_20x150", |b| {
        b.iter(|| black_box(heat.legend_image(20, 150, 0.0, 1.0)));
    });
}

criterion_group!(benches, bench_heat_color, bench_legend_image);
criterion_main!(benches);
