//! Draw routines for the section animation.
//!
//! Everything renders through [`Painter`], a small subset of the Canvas 2D
//! API. The web front-end implements it on `CanvasRenderingContext2d`; tests
//! implement it with a recorder. Coordinates are CSS pixels.

use glam::Vec2;

use crate::color::Rgba;
use crate::constants::*;
use crate::entity::{BackgroundNode, Bee, Butterfly};
use crate::scene::{Scene, Viewport};

pub trait Painter {
    fn clear(&mut self, width: f32, height: f32);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, factor: Vec2);
    fn set_fill(&mut self, color: Rgba);
    fn set_stroke(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f32);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn bezier_curve_to(&mut self, c1: Vec2, c2: Vec2, to: Vec2);
    fn ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32);
    fn circle(&mut self, center: Vec2, radius: f32);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
    /// Fill `[0,width]x[0,height]` with a radial gradient from `inner_color`
    /// at `inner` to `outer_color` at `outer`.
    #[allow(clippy::too_many_arguments)]
    fn fill_radial(
        &mut self,
        center: Vec2,
        inner: f32,
        outer: f32,
        inner_color: Rgba,
        outer_color: Rgba,
        width: f32,
        height: f32,
    );
}

/// One line of the node network.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// Edges are drawn for pairs closer than this.
#[inline]
pub fn edge_threshold(viewport: &Viewport) -> f32 {
    EDGE_DISTANCE_FRACTION * viewport.width.min(viewport.height)
}

/// Linear falloff: `EDGE_MAX_ALPHA` at distance 0, zero at the threshold.
/// `None` at or beyond the threshold.
#[inline]
pub fn edge_alpha(distance: f32, threshold: f32) -> Option<f32> {
    (distance < threshold).then(|| EDGE_MAX_ALPHA * (1.0 - distance / threshold))
}

/// Every unordered pair `a < b` within the edge threshold.
pub fn network_edges(nodes: &[BackgroundNode], viewport: &Viewport) -> Vec<Edge> {
    let threshold = edge_threshold(viewport);
    let mut edges = Vec::new();
    for (a, na) in nodes.iter().enumerate() {
        for (b, nb) in nodes.iter().enumerate().skip(a + 1) {
            if let Some(alpha) = edge_alpha(na.pos.distance(nb.pos), threshold) {
                edges.push(Edge { a, b, alpha });
            }
        }
    }
    edges
}

pub fn draw_waves<P: Painter + ?Sized>(p: &mut P, scene: &Scene) {
    let (w, h) = (scene.width(), scene.height());
    let phase = scene.t as f32 * WAVE_PHASE_RATE;
    let baseline = h * WAVE_BASELINE;
    let amp = h * WAVE_AMPLITUDE;

    p.set_stroke(WAVE_COLOR.with_alpha(WAVE_ALPHA));
    p.set_line_width(WAVE_LINE_WIDTH);
    p.begin_path();
    p.move_to(Vec2::new(0.0, baseline + phase.sin() * amp));
    let mut x = WAVE_STEP_PX;
    while x < w {
        p.line_to(Vec2::new(x, baseline + (x * WAVE_SPATIAL_FREQ + phase).sin() * amp));
        x += WAVE_STEP_PX;
    }
    p.line_to(Vec2::new(w, baseline + (w * WAVE_SPATIAL_FREQ + phase).sin() * amp));
    p.stroke();
}

/// Edges first so nodes sit on top of them.
pub fn draw_network<P: Painter + ?Sized>(p: &mut P, scene: &Scene) {
    p.set_line_width(EDGE_LINE_WIDTH);
    for e in network_edges(&scene.nodes, &scene.viewport) {
        let (na, nb) = (&scene.nodes[e.a], &scene.nodes[e.b]);
        p.set_stroke(na.color.with_alpha(e.alpha));
        p.begin_path();
        p.move_to(na.pos);
        p.line_to(nb.pos);
        p.stroke();
    }
    for n in &scene.nodes {
        draw_node(p, n, scene.t);
    }
}

fn draw_node<P: Painter + ?Sized>(p: &mut P, n: &BackgroundNode, t: u64) {
    p.set_fill(n.color.with_alpha(n.opacity));
    p.begin_path();
    p.circle(n.pos, n.pulsed_radius(t));
    p.fill();
}

pub fn draw_butterfly<P: Painter + ?Sized>(p: &mut P, b: &Butterfly, t: u64) {
    let s = b.size;
    p.save();
    p.translate(b.pos);
    p.rotate(b.tilt(t));

    // Wings, squashed on x to fake the flap.
    p.save();
    p.scale(Vec2::new(b.flap(t), 1.0));
    for side in [-1.0_f32, 1.0] {
        p.set_fill(b.primary.with_alpha(b.opacity));
        p.begin_path();
        p.move_to(Vec2::ZERO);
        p.bezier_curve_to(
            Vec2::new(side * s * 0.9, -s * 1.3),
            Vec2::new(side * s * 1.4, -s * 0.2),
            Vec2::new(side * s * 0.2, s * 0.1),
        );
        p.close_path();
        p.fill();

        p.set_fill(b.secondary.with_alpha(b.opacity * 0.9));
        p.begin_path();
        p.move_to(Vec2::new(0.0, s * 0.1));
        p.bezier_curve_to(
            Vec2::new(side * s * 0.9, s * 0.2),
            Vec2::new(side * s * 0.8, s * 1.0),
            Vec2::new(side * s * 0.1, s * 0.5),
        );
        p.close_path();
        p.fill();
    }
    p.restore();

    let body = BUTTERFLY_BODY_COLOR.with_alpha(b.opacity);
    p.set_fill(body);
    p.begin_path();
    p.ellipse(Vec2::new(0.0, s * 0.15), Vec2::new(s * 0.08, s * 0.45), 0.0);
    p.fill();

    p.set_stroke(body);
    p.set_line_width(0.8);
    p.begin_path();
    for side in [-1.0_f32, 1.0] {
        p.move_to(Vec2::new(0.0, -s * 0.25));
        p.bezier_curve_to(
            Vec2::new(side * s * 0.1, -s * 0.5),
            Vec2::new(side * s * 0.2, -s * 0.6),
            Vec2::new(side * s * 0.3, -s * 0.7),
        );
    }
    p.stroke();
    p.restore();
}

pub fn draw_bee<P: Painter + ?Sized>(p: &mut P, bee: &Bee, t: u64) {
    let s = bee.size;
    let flutter = 0.6 + 0.4 * (t as f32 * BEE_WING_RATE + bee.anim_phase).sin().abs();
    p.save();
    p.translate(bee.pos);
    p.rotate(bee.heading);

    p.set_fill(bee.wing.with_alpha(bee.opacity * 0.6 * flutter));
    for side in [-1.0_f32, 1.0] {
        p.begin_path();
        p.ellipse(
            Vec2::new(-s * 0.1, side * s * 0.6),
            Vec2::new(s * 0.5, s * 0.3 * flutter),
            side * 0.4,
        );
        p.fill();
    }

    p.set_fill(bee.body.with_alpha(bee.opacity));
    p.begin_path();
    p.ellipse(Vec2::ZERO, Vec2::new(s, s * 0.6), 0.0);
    p.fill();

    p.set_stroke(bee.stripe.with_alpha(bee.opacity));
    p.set_line_width(s * 0.18);
    p.begin_path();
    for k in [-0.3_f32, 0.1] {
        p.move_to(Vec2::new(k * s, -s * 0.55));
        p.line_to(Vec2::new(k * s, s * 0.55));
    }
    p.stroke();

    p.set_fill(bee.stripe.with_alpha(bee.opacity));
    p.begin_path();
    p.circle(Vec2::new(s * 1.05, 0.0), s * 0.4);
    p.fill();
    p.restore();
}

pub fn draw_vignette<P: Painter + ?Sized>(p: &mut P, viewport: &Viewport) {
    let (w, h) = (viewport.width, viewport.height);
    p.fill_radial(
        Vec2::new(w * 0.5, h * 0.5),
        w.min(h) * VIGNETTE_INNER,
        w.max(h) * VIGNETTE_OUTER,
        VIGNETTE_COLOR.with_alpha(0.0),
        VIGNETTE_COLOR.with_alpha(VIGNETTE_ALPHA),
        w,
        h,
    );
}
