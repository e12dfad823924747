// Host-side tests for the page contract and mount options.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::*;
use constants::*;
use std::time::Duration;

#[test]
fn default_options_match_page_contract() {
    let opts = MountOptions::default();
    assert_eq!(opts.section_id, SECTION_ID);
    assert_eq!(opts.canvas_id, CANVAS_ID);
    assert_eq!(opts.threshold(), 0.05);
    assert_eq!(opts.resize_debounce, Duration::from_millis(200));
    assert_eq!(opts.debounce_ms(), 200);
}

#[test]
fn with_ids_keeps_other_defaults() {
    let opts = MountOptions::with_ids("hero", "hero-canvas");
    assert_eq!(opts.section_id, "hero");
    assert_eq!(opts.canvas_id, "hero-canvas");
    assert_eq!(opts.visibility_threshold, VISIBILITY_THRESHOLD);
}

#[test]
fn threshold_is_sanitized() {
    let mut opts = MountOptions::default();
    opts.visibility_threshold = 1.5;
    assert_eq!(opts.threshold(), 1.0);
    opts.visibility_threshold = -0.2;
    assert_eq!(opts.threshold(), 0.0);
    opts.visibility_threshold = f64::NAN;
    assert_eq!(opts.threshold(), VISIBILITY_THRESHOLD);
}

#[test]
fn debounce_never_rounds_to_zero() {
    let mut opts = MountOptions::default();
    opts.resize_debounce = Duration::from_micros(200);
    assert_eq!(opts.debounce_ms(), 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_fractions() {
    assert!(VISIBILITY_THRESHOLD > 0.0 && VISIBILITY_THRESHOLD < 1.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
}
