// Shared test doubles: a painter that records calls and a host that counts
// frame scheduling.

#![allow(dead_code)]

use dg_core::{FrameHost, Painter, Rgba, Viewport};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    Scale(Vec2),
    Fill(Rgba),
    StrokeStyle(Rgba),
    LineWidth(f32),
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    Bezier,
    Ellipse,
    Circle(Vec2, f32),
    ClosePath,
    FillPath,
    StrokePath,
    Radial { center: Vec2, inner: f32, outer: f32 },
}

#[derive(Default)]
pub struct RecordingPainter {
    pub ops: Vec<Op>,
}

impl RecordingPainter {
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    /// Line segments stroked as `move_to, line_to, stroke` with the alpha in
    /// effect, in draw order.
    pub fn segments(&self) -> Vec<(Vec2, Vec2, f32)> {
        let mut out = Vec::new();
        let mut alpha = 0.0;
        for w in self.ops.windows(4) {
            if let Op::StrokeStyle(c) = &w[0] {
                alpha = c.a;
            }
            if let [Op::BeginPath, Op::MoveTo(a), Op::LineTo(b), Op::StrokePath] = &w[..] {
                out.push((*a, *b, alpha));
            }
        }
        out
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.ops.push(Op::Clear);
    }
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn translate(&mut self, offset: Vec2) {
        self.ops.push(Op::Translate(offset));
    }
    fn rotate(&mut self, radians: f32) {
        self.ops.push(Op::Rotate(radians));
    }
    fn scale(&mut self, factor: Vec2) {
        self.ops.push(Op::Scale(factor));
    }
    fn set_fill(&mut self, color: Rgba) {
        self.ops.push(Op::Fill(color));
    }
    fn set_stroke(&mut self, color: Rgba) {
        self.ops.push(Op::StrokeStyle(color));
    }
    fn set_line_width(&mut self, width: f32) {
        self.ops.push(Op::LineWidth(width));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, p: Vec2) {
        self.ops.push(Op::MoveTo(p));
    }
    fn line_to(&mut self, p: Vec2) {
        self.ops.push(Op::LineTo(p));
    }
    fn bezier_curve_to(&mut self, _c1: Vec2, _c2: Vec2, _to: Vec2) {
        self.ops.push(Op::Bezier);
    }
    fn ellipse(&mut self, _center: Vec2, _radii: Vec2, _rotation: f32) {
        self.ops.push(Op::Ellipse);
    }
    fn circle(&mut self, center: Vec2, radius: f32) {
        self.ops.push(Op::Circle(center, radius));
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
    fn fill(&mut self) {
        self.ops.push(Op::FillPath);
    }
    fn stroke(&mut self) {
        self.ops.push(Op::StrokePath);
    }
    fn fill_radial(
        &mut self,
        center: Vec2,
        inner: f32,
        outer: f32,
        _inner_color: Rgba,
        _outer_color: Rgba,
        _width: f32,
        _height: f32,
    ) {
        self.ops.push(Op::Radial {
            center,
            inner,
            outer,
        });
    }
}

pub struct FakeHost {
    pub viewport: Option<Viewport>,
    pub requested: u32,
    pub cancelled: u32,
    pub prepared: u32,
}

impl FakeHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Some(Viewport::new(width, height, 1.0)),
            requested: 0,
            cancelled: 0,
            prepared: 0,
        }
    }

    /// Frames requested and not cancelled.
    pub fn outstanding(&self) -> i64 {
        self.requested as i64 - self.cancelled as i64
    }
}

impl FrameHost for FakeHost {
    fn prepare_surface(&mut self) -> Option<Viewport> {
        self.prepared += 1;
        self.viewport
    }
    fn request_frame(&mut self) {
        self.requested += 1;
    }
    fn cancel_frame(&mut self) {
        self.cancelled += 1;
    }
}
