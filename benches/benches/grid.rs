// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `cellview_geometry` grid generation.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;

use cellview_geometry::GridGeometry;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/generate_data");

    // Array sizes from a small test chip up to a dense slide.
    for side in [33.0_f64, 100.0, 500.0] {
        let rect = Rect::new(1.0, 1.0, side, side);
        let border = rect.inflate(1.0, 1.0);
        group.throughput(Throughput::Elements(side as u64));
        group.bench_with_input(BenchmarkId::new("spacing_1", side), &rect, |b, rect| {
            let mut grid = GridGeometry::new();
            grid.set_dimensions(border, *rect);
            b.iter(|| {
                grid.generate_data();
                black_box(grid.grid_lines().len());
            });
        });
        group.bench_with_input(BenchmarkId::new("spacing_0_3", side), &rect, |b, rect| {
            let mut grid = GridGeometry::new();
            grid.set_dimensions(border, *rect);
            grid.set_spacing(0.3);
            b.iter(|| {
                grid.generate_data();
                black_box(grid.grid_lines().len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
