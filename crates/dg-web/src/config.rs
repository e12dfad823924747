use std::time::Duration;

use super::constants::{CANVAS_ID, SECTION_ID, VISIBILITY_THRESHOLD};

/// Where and how the section animation attaches to the page.
#[derive(Clone, Debug, PartialEq)]
pub struct MountOptions {
    pub section_id: String,
    pub canvas_id: String,
    /// IntersectionObserver threshold, `0.0..=1.0`.
    pub visibility_threshold: f64,
    pub resize_debounce: Duration,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            section_id: SECTION_ID.to_string(),
            canvas_id: CANVAS_ID.to_string(),
            visibility_threshold: VISIBILITY_THRESHOLD,
            resize_debounce: dg_core::RESIZE_QUIET,
        }
    }
}

impl MountOptions {
    pub fn with_ids(section_id: &str, canvas_id: &str) -> Self {
        Self {
            section_id: section_id.to_string(),
            canvas_id: canvas_id.to_string(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        if self.visibility_threshold.is_finite() {
            self.visibility_threshold.clamp(0.0, 1.0)
        } else {
            VISIBILITY_THRESHOLD
        }
    }

    /// Debounce in whole milliseconds for `setTimeout`, at least 1.
    #[inline]
    pub fn debounce_ms(&self) -> i32 {
        self.resize_debounce.as_millis().clamp(1, i32::MAX as u128) as i32
    }
}
