// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording surface for node tests.

use alloc::vec::Vec;

use kurbo::{Affine, Line, Point, Rect};
use peniko::{Color, ImageData};

use cellview_node::Surface;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    Clear,
    Lines(Vec<Line>, [f32; 4]),
    Polyline(Vec<Point>, bool),
    FillRect(Rect, [f32; 4]),
    StrokeRect(Rect, [f32; 4]),
    Points(Vec<(Point, [f32; 4])>),
    Image(Rect),
}

#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) transform: Affine,
    pub(crate) ops: Vec<Op>,
}

impl Surface for Recorder {
    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn clear(&mut self, _: Color) {
        self.ops.push(Op::Clear);
    }

    fn draw_lines(&mut self, lines: &[Line], color: Color, _: f64) {
        self.ops.push(Op::Lines(lines.to_vec(), color.components));
    }

    fn draw_polyline(&mut self, points: &[Point], closed: bool, _: Color, _: f64) {
        self.ops.push(Op::Polyline(points.to_vec(), closed));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(Op::FillRect(rect, color.components));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, _: f64) {
        self.ops.push(Op::StrokeRect(rect, color.components));
    }

    fn draw_points(&mut self, points: &[(Point, Color)], _: f64) {
        self.ops
            .push(Op::Points(points.iter().map(|(p, c)| (*p, c.components)).collect()));
    }

    fn draw_image(&mut self, _: &ImageData, dest: Rect) {
        self.ops.push(Op::Image(dest));
    }
}
