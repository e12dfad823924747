//! Entities drawn in the section animation and the factories that spawn them.
//!
//! Factories are pure: they take a spawn index (used to pick a palette entry
//! as `index % palette.len()`), the current bounds, and an RNG. Nothing here
//! can fail.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::color::Rgb;
use crate::constants::*;

/// Uniform sample in `[lo, hi)`; tolerates degenerate ranges.
#[inline]
pub(crate) fn sample<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

/// Where a background node is allowed to spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeBias {
    /// Left or right side band, alternating by index.
    Edge,
    /// Lower part of the section.
    Bottom,
}

/// Drifting point of the background network.
#[derive(Clone, Debug)]
pub struct BackgroundNode {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub pulse_phase: f32,
    pub color: Rgb,
    pub bias: NodeBias,
}

impl BackgroundNode {
    pub fn spawn<R: Rng + ?Sized>(
        index: usize,
        bias: NodeBias,
        bounds: Vec2,
        rng: &mut R,
    ) -> Self {
        let pos = match bias {
            NodeBias::Edge => {
                let band = bounds.x * NODE_EDGE_BAND;
                let x = if index % 2 == 0 {
                    sample(rng, (0.0, band))
                } else {
                    sample(rng, (bounds.x - band, bounds.x))
                };
                Vec2::new(x, sample(rng, (0.0, bounds.y)))
            }
            NodeBias::Bottom => Vec2::new(
                sample(rng, (0.0, bounds.x)),
                sample(rng, (bounds.y * (1.0 - NODE_BOTTOM_BAND), bounds.y)),
            ),
        };
        Self {
            pos,
            vel: Vec2::new(
                sample(rng, (-NODE_SPEED_MAX, NODE_SPEED_MAX)),
                sample(rng, (-NODE_SPEED_MAX, NODE_SPEED_MAX)),
            ),
            radius: sample(rng, NODE_RADIUS_RANGE),
            opacity: sample(rng, NODE_OPACITY_RANGE),
            pulse_phase: sample(rng, (0.0, TAU)),
            color: NODE_PALETTE[index % NODE_PALETTE.len()],
            bias,
        }
    }

    /// Radius at frame `t`, modulated by the node's own pulse phase.
    #[inline]
    pub fn pulsed_radius(&self, t: u64) -> f32 {
        let phase = t as f32 * NODE_PULSE_RATE + self.pulse_phase;
        self.radius * (1.0 + NODE_PULSE_DEPTH * phase.sin())
    }
}

#[derive(Clone, Debug)]
pub struct Butterfly {
    pub pos: Vec2,
    /// Fixed phase feeding the drift curve; the butterfly never rotates to face it.
    pub heading_phase: f32,
    pub speed: f32,
    pub size: f32,
    /// Offsets the wing flap so butterflies do not flap in unison.
    pub anim_phase: f32,
    pub opacity: f32,
    pub primary: Rgb,
    pub secondary: Rgb,
}

impl Butterfly {
    pub fn spawn<R: Rng + ?Sized>(index: usize, bounds: Vec2, rng: &mut R) -> Self {
        let inset = bounds * BUTTERFLY_SPAWN_INSET;
        let (primary, secondary) = BUTTERFLY_PALETTE[index % BUTTERFLY_PALETTE.len()];
        Self {
            pos: Vec2::new(
                sample(rng, (inset.x, bounds.x - inset.x)),
                sample(rng, (inset.y, bounds.y - inset.y)),
            ),
            heading_phase: sample(rng, (0.0, TAU)),
            speed: sample(rng, BUTTERFLY_SPEED_RANGE),
            size: sample(rng, BUTTERFLY_SIZE_RANGE),
            anim_phase: sample(rng, (0.0, TAU)),
            opacity: sample(rng, BUTTERFLY_OPACITY_RANGE),
            primary,
            secondary,
        }
    }

    /// Horizontal wing scale in `[0.3, 1.0]`; `|sin|` keeps it from mirroring.
    #[inline]
    pub fn flap(&self, t: u64) -> f32 {
        0.3 + 0.7 * (t as f32 * BUTTERFLY_FLAP_RATE + self.anim_phase).sin().abs()
    }

    /// Small body tilt; deliberately not the travel heading.
    #[inline]
    pub fn tilt(&self, t: u64) -> f32 {
        (t as f32 * BUTTERFLY_TILT_RATE + self.heading_phase).sin() * BUTTERFLY_TILT_MAX
    }
}

#[derive(Clone, Debug)]
pub struct Bee {
    pub pos: Vec2,
    /// Travel direction in radians.
    pub heading: f32,
    pub speed: f32,
    pub size: f32,
    pub anim_phase: f32,
    pub opacity: f32,
    pub body: Rgb,
    pub stripe: Rgb,
    pub wing: Rgb,
}

impl Bee {
    pub fn spawn<R: Rng + ?Sized>(index: usize, bounds: Vec2, rng: &mut R) -> Self {
        let (body, stripe, wing) = BEE_PALETTE[index % BEE_PALETTE.len()];
        Self {
            pos: Vec2::new(sample(rng, (0.0, bounds.x)), sample(rng, (0.0, bounds.y))),
            heading: sample(rng, (0.0, TAU)),
            speed: sample(rng, BEE_SPEED_RANGE),
            size: sample(rng, BEE_SIZE_RANGE),
            anim_phase: sample(rng, (0.0, TAU)),
            opacity: sample(rng, BEE_OPACITY_RANGE),
            body,
            stripe,
            wing,
        }
    }
}
