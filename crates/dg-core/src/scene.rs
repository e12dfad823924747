//! Scene state for the section animation.
//!
//! A [`Scene`] is built wholesale for one [`Viewport`] and thrown away on
//! resize; nothing in it survives a rebuild.

use glam::Vec2;
use rand::Rng;

use crate::constants::{DESKTOP_POPULATION, MOBILE_MAX_WIDTH, MOBILE_POPULATION};
use crate::entity::{BackgroundNode, Bee, Butterfly, NodeBias};

/// Measured drawing surface. `width`/`height` are CSS pixels; the backing
/// store is `width * dpr` by `height * dpr`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl Viewport {
    /// Clamps to at least 1x1 so downstream math never divides by zero.
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            dpr: if dpr > 0.0 { dpr } else { 1.0 },
        }
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn width_class(&self) -> WidthClass {
        if self.width < MOBILE_MAX_WIDTH {
            WidthClass::Mobile
        } else {
            WidthClass::Desktop
        }
    }

    /// Backing-store size in device pixels.
    #[inline]
    pub fn backing_size(&self) -> (u32, u32) {
        (
            ((self.width * self.dpr) as u32).max(1),
            ((self.height * self.dpr) as u32).max(1),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidthClass {
    Mobile,
    Desktop,
}

impl WidthClass {
    pub fn population(self) -> Population {
        match self {
            WidthClass::Mobile => MOBILE_POPULATION,
            WidthClass::Desktop => DESKTOP_POPULATION,
        }
    }
}

/// How many entities of each kind a scene is built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Population {
    pub edge_nodes: usize,
    pub bottom_nodes: usize,
    pub butterflies: usize,
    pub bees: usize,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub viewport: Viewport,
    /// Frame counter; advanced once per rendered frame.
    pub t: u64,
    pub nodes: Vec<BackgroundNode>,
    pub butterflies: Vec<Butterfly>,
    pub bees: Vec<Bee>,
    pub initialized: bool,
}

impl Scene {
    /// Build a scene with the population for the viewport's width class.
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        Self::with_population(viewport, viewport.width_class().population(), rng)
    }

    pub fn with_population<R: Rng + ?Sized>(
        viewport: Viewport,
        population: Population,
        rng: &mut R,
    ) -> Self {
        let bounds = viewport.bounds();
        let mut nodes = Vec::with_capacity(population.edge_nodes + population.bottom_nodes);
        for i in 0..population.edge_nodes {
            nodes.push(BackgroundNode::spawn(i, NodeBias::Edge, bounds, rng));
        }
        for i in 0..population.bottom_nodes {
            nodes.push(BackgroundNode::spawn(i, NodeBias::Bottom, bounds, rng));
        }
        let butterflies = (0..population.butterflies)
            .map(|i| Butterfly::spawn(i, bounds, rng))
            .collect::<Vec<_>>();
        let bees = (0..population.bees)
            .map(|i| Bee::spawn(i, bounds, rng))
            .collect::<Vec<_>>();
        log::debug!(
            "scene built: {}x{} @{}x, {} nodes, {} butterflies, {} bees",
            viewport.width,
            viewport.height,
            viewport.dpr,
            nodes.len(),
            butterflies.len(),
            bees.len()
        );
        Self {
            viewport,
            t: 0,
            nodes,
            butterflies,
            bees,
            initialized: true,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.viewport.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.viewport.height
    }

    /// Count of nodes spawned with the given bias.
    pub fn node_count(&self, bias: NodeBias) -> usize {
        self.nodes.iter().filter(|n| n.bias == bias).count()
    }
}
