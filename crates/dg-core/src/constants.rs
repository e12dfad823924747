use std::time::Duration;

use crate::color::Rgb;
use crate::scene::Population;

// Tuning constants for the section animation. All distances are CSS pixels.

// Width classes
pub const MOBILE_MAX_WIDTH: f32 = 768.0; // widths below this use the mobile counts

// Population per width class. Bees are wired up but not spawned.
pub const DESKTOP_POPULATION: Population = Population {
    edge_nodes: 12,
    bottom_nodes: 6,
    butterflies: 3,
    bees: 0,
};
pub const MOBILE_POPULATION: Population = Population {
    edge_nodes: 8,
    bottom_nodes: 4,
    butterflies: 2,
    bees: 0,
};

// Background nodes
pub const NODE_EDGE_BAND: f32 = 0.25; // fraction of width covered by each side band
pub const NODE_BOTTOM_BAND: f32 = 0.4; // bottom fraction of height for bottom-biased nodes
pub const NODE_SPEED_MAX: f32 = 0.25; // max |v| per axis, px/frame
pub const NODE_RADIUS_RANGE: (f32, f32) = (1.5, 3.5);
pub const NODE_OPACITY_RANGE: (f32, f32) = (0.3, 0.7);
pub const NODE_PULSE_RATE: f32 = 0.05; // radians per frame
pub const NODE_PULSE_DEPTH: f32 = 0.3; // radius modulation amplitude (fraction)

// Network edges
pub const EDGE_DISTANCE_FRACTION: f32 = 0.3; // of min(width, height)
pub const EDGE_MAX_ALPHA: f32 = 0.35;
pub const EDGE_LINE_WIDTH: f32 = 0.8;

// Butterflies
pub const BUTTERFLY_SPEED_RANGE: (f32, f32) = (0.3, 0.6);
pub const BUTTERFLY_SIZE_RANGE: (f32, f32) = (10.0, 16.0);
pub const BUTTERFLY_OPACITY_RANGE: (f32, f32) = (0.6, 0.9);
pub const BUTTERFLY_SPAWN_INSET: f32 = 0.1; // keep spawns away from the edges
pub const BUTTERFLY_EDGE_MARGIN: f32 = 0.05; // fraction of each dimension
pub const BUTTERFLY_EDGE_NUDGE: f32 = 0.4; // px/frame push back toward the interior
pub const BUTTERFLY_FLAP_RATE: f32 = 0.15;
pub const BUTTERFLY_TILT_RATE: f32 = 0.02;
pub const BUTTERFLY_TILT_MAX: f32 = 0.15; // radians

// Bees
pub const BEE_SPEED_RANGE: (f32, f32) = (0.8, 1.4);
pub const BEE_SIZE_RANGE: (f32, f32) = (5.0, 8.0);
pub const BEE_OPACITY_RANGE: (f32, f32) = (0.7, 0.95);
pub const BEE_TURN_JITTER: f32 = 0.3; // radians, full width of the random heading term
pub const BEE_EDGE_MARGIN: f32 = 0.1;
pub const BEE_EDGE_STEER: f32 = 0.1; // fraction of the heading error corrected per frame
pub const BEE_POSITION_JITTER: f32 = 0.4; // px, full width
pub const BEE_WING_RATE: f32 = 0.6;

// Background wave
pub const WAVE_BASELINE: f32 = 0.75; // fraction of height
pub const WAVE_AMPLITUDE: f32 = 0.03; // fraction of height
pub const WAVE_SPATIAL_FREQ: f32 = 0.01; // radians per px
pub const WAVE_PHASE_RATE: f32 = 0.02; // radians per frame
pub const WAVE_STEP_PX: f32 = 8.0;
pub const WAVE_ALPHA: f32 = 0.12;
pub const WAVE_LINE_WIDTH: f32 = 1.5;

// Vignette
pub const VIGNETTE_INNER: f32 = 0.3; // fraction of min(width, height)
pub const VIGNETTE_OUTER: f32 = 0.75; // fraction of max(width, height)
pub const VIGNETTE_ALPHA: f32 = 0.35;

// Lifecycle
pub const RESIZE_QUIET: Duration = Duration::from_millis(200);

// Palettes
pub const NODE_PALETTE: [Rgb; 4] = [
    Rgb::new(16, 185, 129), // emerald
    Rgb::new(52, 211, 153),
    Rgb::new(20, 184, 166), // teal
    Rgb::new(132, 204, 22), // lime
];

pub const BUTTERFLY_PALETTE: [(Rgb, Rgb); 4] = [
    (Rgb::new(251, 191, 36), Rgb::new(245, 158, 11)), // amber
    (Rgb::new(244, 114, 182), Rgb::new(236, 72, 153)), // pink
    (Rgb::new(96, 165, 250), Rgb::new(59, 130, 246)), // blue
    (Rgb::new(167, 139, 250), Rgb::new(139, 92, 246)), // violet
];

// (body, stripe, wing)
pub const BEE_PALETTE: [(Rgb, Rgb, Rgb); 2] = [
    (Rgb::new(250, 204, 21), Rgb::new(30, 27, 24), Rgb::new(224, 242, 254)),
    (Rgb::new(245, 158, 11), Rgb::new(41, 37, 36), Rgb::new(240, 249, 255)),
];

pub const WAVE_COLOR: Rgb = Rgb::new(16, 185, 129);
pub const BUTTERFLY_BODY_COLOR: Rgb = Rgb::new(41, 37, 36);
pub const VIGNETTE_COLOR: Rgb = Rgb::new(0, 0, 0);
