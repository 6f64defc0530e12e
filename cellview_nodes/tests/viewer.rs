// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cell viewer node stack driven through a canvas.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Affine, Line, Point, Rect};
use peniko::{Blob, Color, ImageAlphaType, ImageData, ImageFormat};

use cellview_canvas::{CanvasView, InputEvent, NodeHandle, SelectionTool};
use cellview_node::{PointerButton, PointerEvent, RenderNode, SelectionEvent, Surface};
use cellview_nodes::{GridNode, HeatMapLegendNode, ImageNode, MiniMapNode, Spot, SpotsNode};

#[derive(Default)]
struct Counter {
    transform: Affine,
    images: usize,
    line_batches: usize,
    points: usize,
    rects: usize,
}

impl Surface for Counter {
    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn clear(&mut self, _: Color) {}

    fn draw_lines(&mut self, _: &[Line], _: Color, _: f64) {
        self.line_batches += 1;
    }

    fn draw_polyline(&mut self, _: &[Point], _: bool, _: Color, _: f64) {}

    fn fill_rect(&mut self, _: Rect, _: Color) {
        self.rects += 1;
    }

    fn stroke_rect(&mut self, _: Rect, _: Color, _: f64) {
        self.rects += 1;
    }

    fn draw_points(&mut self, points: &[(Point, Color)], _: f64) {
        self.points += points.len();
    }

    fn draw_image(&mut self, _: &ImageData, _: Rect) {
        self.images += 1;
    }
}

struct Viewer {
    canvas: CanvasView,
    grid: Rc<RefCell<GridNode>>,
    spots: Rc<RefCell<SpotsNode>>,
    minimap: Rc<RefCell<MiniMapNode>>,
}

fn tissue(width: u32, height: u32) -> ImageData {
    ImageData {
        data: Blob::from(vec![128_u8; width as usize * height as usize * 4]),
        format: ImageFormat::Rgba8,
        alpha_type: ImageAlphaType::Alpha,
        width,
        height,
    }
}

fn viewer() -> Viewer {
    let mut image = ImageNode::new();
    image.set_image(tissue(100, 50)).expect("valid image");
    let scene = Rect::new(0.0, 0.0, 100.0, 50.0);
    let mut canvas = CanvasView::new(scene, Rect::new(0.0, 0.0, 400.0, 400.0));

    let grid = Rc::new(RefCell::new(GridNode::new()));
    grid.borrow_mut()
        .set_dimensions(scene, Rect::new(10.0, 10.0, 90.0, 40.0));

    let spots = Rc::new(RefCell::new(SpotsNode::new()));
    spots.borrow_mut().set_spots(vec![
        Spot::new(Point::new(10.0, 10.0), 1.0),
        Spot::new(Point::new(50.0, 25.0), 4.0),
        Spot::new(Point::new(90.0, 40.0), 9.0),
    ]);

    let legend = Rc::new(RefCell::new(HeatMapLegendNode::new()));
    legend.borrow_mut().set_boundaries(1.0, 9.0);
    let minimap = Rc::new(RefCell::new(MiniMapNode::new()));

    let image: NodeHandle = Rc::new(RefCell::new(image));
    let handles: [NodeHandle; 5] = [
        image,
        grid.clone(),
        spots.clone(),
        legend,
        minimap.clone(),
    ];
    for handle in handles {
        assert!(canvas.add_rendering_node(handle));
    }
    Viewer {
        canvas,
        grid,
        spots,
        minimap,
    }
}

fn primary(x: f64, y: f64) -> PointerEvent {
    PointerEvent::new(Point::new(x, y), PointerButton::Primary)
}

#[test]
fn frame_draws_every_visible_node() {
    let mut viewer = viewer();
    let mut surface = Counter::default();
    viewer.canvas.render(&mut surface);
    // Image and legend strip.
    assert_eq!(surface.images, 2);
    // The grid starts hidden.
    assert_eq!(surface.line_batches, 0);
    assert_eq!(surface.points, 3);

    viewer.grid.borrow_mut().state_mut().set_visible(true);
    assert!(viewer.canvas.take_repaint_request());
    let mut surface = Counter::default();
    viewer.canvas.render(&mut surface);
    assert_eq!(surface.line_batches, 2);
}

#[test]
fn rubber_band_selects_spots_under_it() {
    let mut viewer = viewer();
    let seen = Rc::new(RefCell::new(0));
    let sink = seen.clone();
    viewer
        .canvas
        .set_selection_callback(move |_: &SelectionEvent| *sink.borrow_mut() += 1);
    viewer
        .canvas
        .set_selection_mode(Some(SelectionTool::Rectangle));

    // Viewport (180, 180)-(220, 220) is scene (45, 20)-(55, 30).
    viewer
        .canvas
        .handle_input(InputEvent::PointerDown(primary(180.0, 180.0)));
    viewer
        .canvas
        .handle_input(InputEvent::PointerMove(primary(220.0, 220.0)));
    viewer
        .canvas
        .handle_input(InputEvent::PointerUp(primary(220.0, 220.0)));

    let spots = viewer.spots.borrow();
    assert_eq!(spots.selected_indices().collect::<Vec<_>>(), [1]);
    assert_eq!(*seen.borrow(), 1);
}

#[test]
fn minimap_click_recenters_the_canvas() {
    let mut viewer = viewer();
    viewer.canvas.set_zoom(8.0);
    assert_eq!(
        viewer.minimap.borrow().scene(),
        Rect::new(0.0, 0.0, 100.0, 50.0)
    );

    // The minimap covers viewport (290, 340)-(390, 390) at one pixel per
    // scene unit.
    assert!(
        viewer
            .canvas
            .handle_input(InputEvent::PointerDown(primary(365.0, 365.0)))
    );
    let focus = viewer.canvas.focus_center();
    assert!((focus.x - 75.0).abs() < 1e-9, "focus {focus:?}");
    assert!((focus.y - 25.0).abs() < 1e-9, "focus {focus:?}");
    viewer
        .canvas
        .handle_input(InputEvent::PointerUp(primary(365.0, 365.0)));

    let visible = viewer.minimap.borrow().visible_region();
    assert!((visible.center().x - 75.0).abs() < 1e-9);
}

#[test]
fn minimap_drag_released_off_the_map_ends() {
    let mut viewer = viewer();
    viewer.canvas.set_zoom(8.0);
    viewer
        .canvas
        .handle_input(InputEvent::PointerDown(primary(365.0, 365.0)));
    viewer
        .canvas
        .handle_input(InputEvent::PointerMove(primary(100.0, 100.0)));
    viewer
        .canvas
        .handle_input(InputEvent::PointerUp(primary(100.0, 100.0)));

    viewer.canvas.center_on(Point::new(70.0, 25.0));
    let before = viewer.canvas.focus_center();
    // Hovering over the map with no button held leaves the view alone.
    let hover = PointerEvent::new(Point::new(295.0, 365.0), PointerButton::None);
    viewer.canvas.handle_input(InputEvent::PointerMove(hover));
    assert_eq!(viewer.canvas.focus_center(), before);
}

#[test]
fn press_outside_the_minimap_pans() {
    let mut viewer = viewer();
    viewer.canvas.set_zoom(8.0);
    let before = viewer.canvas.focus_center();
    viewer
        .canvas
        .handle_input(InputEvent::PointerDown(primary(100.0, 100.0)));
    viewer
        .canvas
        .handle_input(InputEvent::PointerMove(primary(140.0, 100.0)));
    viewer
        .canvas
        .handle_input(InputEvent::PointerUp(primary(140.0, 100.0)));
    let after = viewer.canvas.focus_center();
    assert!((before.x - after.x - 5.0).abs() < 1e-9);
}
