// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for pointer dispatch and selection delivery in `cellview_canvas`.

use std::cell::RefCell;
use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};

use cellview_canvas::{CanvasView, InputEvent, NodeHandle, SelectionTool};
use cellview_node::{NodeFlags, PointerButton, PointerEvent, RenderNode};
use cellview_nodes::{MiniMapNode, Spot, SpotsNode};

const SCENE: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);
const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

fn spots(count: usize) -> SpotsNode {
    let side = (count as f64).sqrt().ceil();
    let mut node = SpotsNode::new();
    node.state_mut().set_flag(NodeFlags::SELECTABLE, true);
    node.set_spots(
        (0..count)
            .map(|i| {
                let (x, y) = ((i as f64) % side, (i as f64 / side).floor());
                Spot::new(
                    Point::new(x * 1000.0 / side, y * 1000.0 / side),
                    i as f64,
                )
            })
            .collect(),
    );
    node
}

fn canvas(layers: usize, spots_per_layer: usize) -> CanvasView {
    let mut canvas = CanvasView::new(SCENE, VIEWPORT);
    for _ in 0..layers {
        let node: NodeHandle = Rc::new(RefCell::new(spots(spots_per_layer)));
        canvas.add_rendering_node(node);
    }
    let minimap: NodeHandle = Rc::new(RefCell::new(MiniMapNode::new()));
    canvas.add_rendering_node(minimap);
    canvas
}

fn bench_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas/pointer_move");
    for layers in [1_usize, 8, 32] {
        let mut canvas = canvas(layers, 64);
        group.bench_with_input(BenchmarkId::from_parameter(layers), &layers, |b, _| {
            let event = PointerEvent::new(Point::new(400.0, 300.0), PointerButton::None);
            b.iter(|| black_box(canvas.handle_input(InputEvent::PointerMove(event))));
        });
    }
    group.finish();
}

fn bench_rubber_band(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas/rubber_band");
    for count in [1_000_usize, 10_000] {
        let mut canvas = canvas(1, count);
        canvas.set_selection_mode(Some(SelectionTool::Rectangle));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let at = |x, y| PointerEvent::new(Point::new(x, y), PointerButton::Primary);
                canvas.handle_input(InputEvent::PointerDown(at(100.0, 100.0)));
                canvas.handle_input(InputEvent::PointerMove(at(500.0, 400.0)));
                black_box(canvas.handle_input(InputEvent::PointerUp(at(500.0, 400.0))));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pointer_move, bench_rubber_band);
criterion_main!(benches);
