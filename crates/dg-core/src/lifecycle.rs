//! Lifecycle of the section animation.
//!
//! The controller is platform-agnostic: the web front-end forwards
//! visibility, resize and animation-frame callbacks here and implements
//! [`FrameHost`] to measure the surface and (un)schedule frames. At most one
//! frame is ever pending.

use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use crate::constants::RESIZE_QUIET;
use crate::debounce::Debouncer;
use crate::frame::advance_frame;
use crate::render::Painter;
use crate::scene::{Scene, Viewport};

/// Platform side of the animation loop.
pub trait FrameHost {
    /// Measure the host section, size the backing store for it and return the
    /// viewport. `None` when the surface is unavailable.
    fn prepare_surface(&mut self) -> Option<Viewport>;
    fn request_frame(&mut self);
    fn cancel_frame(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Reduced motion requested; nothing ever runs.
    Disabled,
    Uninitialized,
    Running,
    Paused,
}

pub struct Lifecycle {
    phase: Phase,
    scene: Option<Scene>,
    visible: bool,
    frame_pending: bool,
    resize: Debouncer,
    rng: StdRng,
    builds: u32,
    frames: u64,
}

impl Lifecycle {
    pub fn new(reduced_motion: bool, rng: StdRng) -> Self {
        let phase = if reduced_motion {
            log::debug!("lifecycle: reduced motion, animation disabled");
            Phase::Disabled
        } else {
            Phase::Uninitialized
        };
        Self {
            phase,
            scene: None,
            visible: false,
            frame_pending: false,
            resize: Debouncer::new(RESIZE_QUIET),
            rng,
            builds: 0,
            frames: 0,
        }
    }

    pub fn with_seed(reduced_motion: bool, seed: u64) -> Self {
        Self::new(reduced_motion, StdRng::seed_from_u64(seed))
    }

    /// Override the resize quiet period (defaults to `RESIZE_QUIET`).
    pub fn with_resize_quiet(mut self, quiet: Duration) -> Self {
        self.resize = Debouncer::new(quiet);
        self
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    #[inline]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Number of times a scene has been built (initial build plus rebuilds).
    #[inline]
    pub fn builds(&self) -> u32 {
        self.builds
    }

    /// Frames rendered since creation.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// How long until the pending resize rebuild is due. `None` when nothing
    /// is pending or the deadline has already passed.
    pub fn resize_remaining(&self, now: Instant) -> Option<Duration> {
        self.resize
            .deadline()
            .filter(|deadline| *deadline > now)
            .map(|deadline| deadline - now)
    }

    pub fn on_visibility<H: FrameHost + ?Sized>(&mut self, visible: bool, host: &mut H) {
        if self.phase == Phase::Disabled {
            log::trace!("lifecycle: visibility ignored (disabled)");
            return;
        }
        self.visible = visible;
        match (self.phase, visible) {
            (Phase::Uninitialized, true) => {
                if self.build_scene(host) {
                    self.transition(Phase::Running);
                    self.schedule(host);
                }
            }
            (Phase::Running, false) => {
                self.transition(Phase::Paused);
                self.unschedule(host);
            }
            (Phase::Paused, true) => {
                self.transition(Phase::Running);
                self.schedule(host);
            }
            _ => {}
        }
    }

    /// Record a raw resize event. The rebuild happens in
    /// [`Lifecycle::on_resize_timer`] once the quiet period has elapsed.
    pub fn on_resize(&mut self, now: Instant) {
        if self.phase == Phase::Disabled {
            return;
        }
        self.resize.trigger(now);
    }

    /// Rebuild the scene if the resize quiet period is over. Returns whether
    /// a rebuild happened.
    pub fn on_resize_timer<H: FrameHost + ?Sized>(&mut self, now: Instant, host: &mut H) -> bool {
        if !self.resize.fire(now) {
            return false;
        }
        if !matches!(self.phase, Phase::Running | Phase::Paused) {
            log::trace!("lifecycle: resize before first build ignored");
            return false;
        }
        self.unschedule(host);
        if !self.build_scene(host) {
            self.scene = None;
            self.transition(Phase::Uninitialized);
            return false;
        }
        if self.visible {
            self.transition(Phase::Running);
            self.schedule(host);
        } else {
            self.transition(Phase::Paused);
        }
        true
    }

    /// Animation-frame callback. Draws only while running; otherwise makes
    /// no painter calls at all. Returns whether a frame was drawn.
    pub fn on_frame<H, P>(&mut self, host: &mut H, painter: &mut P) -> bool
    where
        H: FrameHost + ?Sized,
        P: Painter + ?Sized,
    {
        self.frame_pending = false;
        if self.phase != Phase::Running {
            return false;
        }
        let Some(scene) = self.scene.as_mut() else {
            return false;
        };
        advance_frame(scene, painter, &mut self.rng);
        self.frames += 1;
        self.schedule(host);
        true
    }

    fn build_scene<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let Some(viewport) = host.prepare_surface() else {
            log::debug!("lifecycle: surface unavailable, staying idle");
            return false;
        };
        self.scene = Some(Scene::new(viewport, &mut self.rng));
        self.builds += 1;
        true
    }

    fn schedule<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if !self.frame_pending {
            host.request_frame();
            self.frame_pending = true;
        }
    }

    fn unschedule<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if self.frame_pending {
            host.cancel_frame();
            self.frame_pending = false;
        }
    }

    fn transition(&mut self, next: Phase) {
        if self.phase != next {
            log::debug!("lifecycle: {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }
}
