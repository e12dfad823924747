//! Per-frame motion rules. Every entity ends each step inside `[0, bounds]`.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use crate::constants::*;
use crate::entity::{sample, BackgroundNode, Bee, Butterfly};

/// Euler step with reflective walls: a velocity component flips only when
/// the integrated coordinate leaves `[0, bound]` on that axis.
pub fn step_node(node: &mut BackgroundNode, bounds: Vec2) {
    let mut next = node.pos + node.vel;
    if next.x < 0.0 || next.x > bounds.x {
        node.vel.x = -node.vel.x;
        next.x = next.x.clamp(0.0, bounds.x);
    }
    if next.y < 0.0 || next.y > bounds.y {
        node.vel.y = -node.vel.y;
        next.y = next.y.clamp(0.0, bounds.y);
    }
    node.pos = next;
}

/// Drift vector for a butterfly at frame `t`: two incommensurate sine terms
/// per axis, so the path is smooth and never repeats quickly.
#[inline]
pub fn butterfly_drift(b: &Butterfly, t: u64) -> Vec2 {
    let tf = t as f32;
    let p = b.heading_phase;
    let dx = (tf * 0.008 + p).sin() + 0.5 * (tf * 0.013 + p * 1.7).cos();
    let dy = 0.6 * (tf * 0.006 + p * 0.8).cos() + 0.3 * (tf * 0.011 + p * 1.3).sin();
    Vec2::new(dx, dy) * b.speed
}

/// Push back toward the interior when inside `margin` of a wall.
#[inline]
fn edge_nudge(pos: Vec2, bounds: Vec2, margin: Vec2, strength: f32) -> Vec2 {
    let mut n = Vec2::ZERO;
    if pos.x < margin.x {
        n.x += strength;
    } else if pos.x > bounds.x - margin.x {
        n.x -= strength;
    }
    if pos.y < margin.y {
        n.y += strength;
    } else if pos.y > bounds.y - margin.y {
        n.y -= strength;
    }
    n
}

pub fn step_butterfly(b: &mut Butterfly, t: u64, bounds: Vec2) {
    let nudge = edge_nudge(
        b.pos,
        bounds,
        bounds * BUTTERFLY_EDGE_MARGIN,
        BUTTERFLY_EDGE_NUDGE,
    );
    b.pos = (b.pos + butterfly_drift(b, t) + nudge).clamp(Vec2::ZERO, bounds);
}

/// Signed smallest difference `to - from`, wrapped into `(-PI, PI]`.
#[inline]
fn angle_delta(from: f32, to: f32) -> f32 {
    let mut d = (to - from) % TAU;
    if d > PI {
        d -= TAU;
    } else if d <= -PI {
        d += TAU;
    }
    d
}

pub fn step_bee<R: Rng + ?Sized>(bee: &mut Bee, bounds: Vec2, rng: &mut R) {
    bee.heading += sample(rng, (-0.5, 0.5)) * BEE_TURN_JITTER;

    let margin = bounds * BEE_EDGE_MARGIN;
    let near_edge = bee.pos.x < margin.x
        || bee.pos.x > bounds.x - margin.x
        || bee.pos.y < margin.y
        || bee.pos.y > bounds.y - margin.y;
    if near_edge {
        let to_center = bounds * 0.5 - bee.pos;
        let want = to_center.y.atan2(to_center.x);
        bee.heading += angle_delta(bee.heading, want) * BEE_EDGE_STEER;
    }
    bee.heading %= TAU;

    let jitter = Vec2::new(
        sample(rng, (-0.5, 0.5)) * BEE_POSITION_JITTER,
        sample(rng, (-0.5, 0.5)) * BEE_POSITION_JITTER,
    );
    let dir = Vec2::new(bee.heading.cos(), bee.heading.sin());
    bee.pos = (bee.pos + dir * bee.speed + jitter).clamp(Vec2::ZERO, bounds);
}
