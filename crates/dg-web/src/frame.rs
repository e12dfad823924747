use dg_core::{FrameHost, Lifecycle, Viewport};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::config::MountOptions;
use crate::dom;
use crate::error::MountError;
use crate::events;
use crate::painter::CanvasPainter;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Browser side of [`FrameHost`]: measures the host section and drives
/// `requestAnimationFrame` with a single reusable callback.
pub struct WebHost {
    window: web::Window,
    section: web::Element,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    tick: TickSlot,
    handle: Option<i32>,
}

impl FrameHost for WebHost {
    fn prepare_surface(&mut self) -> Option<Viewport> {
        let rect = self.section.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return None;
        }
        let viewport = Viewport::new(
            rect.width() as f32,
            rect.height() as f32,
            self.window.device_pixel_ratio() as f32,
        );
        let (w_px, h_px) = viewport.backing_size();
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        // pin the displayed size so a dpr > 1 backing store is not shown enlarged
        let style = self.canvas.style();
        for (prop, css) in [("width", viewport.width), ("height", viewport.height)] {
            if let Err(e) = style.set_property(prop, &format!("{css}px")) {
                log::warn!("canvas {prop} style not set: {:?}", e);
            }
        }
        // resizing the backing store resets the transform; draw in CSS pixels
        let dpr = viewport.dpr as f64;
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("set_transform failed: {:?}", e);
        }
        log::debug!(
            "surface {}x{} css, {}x{} backing",
            viewport.width,
            viewport.height,
            w_px,
            h_px
        );
        Some(viewport)
    }

    fn request_frame(&mut self) {
        if let Some(cb) = self.tick.borrow().as_ref() {
            match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(h) => self.handle = Some(h),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(h) = self.handle.take() {
            let _ = self.window.cancel_animation_frame(h);
        }
    }
}

pub struct Animation {
    lifecycle: Lifecycle,
    host: WebHost,
    painter: CanvasPainter,
}

impl Animation {
    pub fn on_visibility(&mut self, visible: bool) {
        self.lifecycle.on_visibility(visible, &mut self.host);
    }

    pub fn on_frame(&mut self) {
        self.host.handle = None;
        self.lifecycle.on_frame(&mut self.host, &mut self.painter);
    }

    pub fn on_resize(&mut self) {
        self.lifecycle.on_resize(Instant::now());
    }

    /// Returns how much longer to wait when the timer fired early.
    pub fn on_resize_timer(&mut self) -> Option<Duration> {
        let now = Instant::now();
        if self.lifecycle.on_resize_timer(now, &mut self.host) {
            return None;
        }
        self.lifecycle.resize_remaining(now)
    }
}

/// Attach the section animation described by `opts`. Does nothing (and
/// returns `Ok`) when the platform asks for reduced motion.
pub fn mount(opts: &MountOptions) -> anyhow::Result<()> {
    let window = web::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;

    if dom::prefers_reduced_motion(&window) {
        log::info!("reduced motion preferred; section animation disabled");
        return Ok(());
    }

    let section = document
        .get_element_by_id(&opts.section_id)
        .ok_or_else(|| MountError::MissingElement(opts.section_id.clone()))?;
    let canvas = document
        .get_element_by_id(&opts.canvas_id)
        .ok_or_else(|| MountError::MissingElement(opts.canvas_id.clone()))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| MountError::NotCanvas(opts.canvas_id.clone()))?;
    let painter = CanvasPainter::from_canvas(&canvas)?;

    let tick: TickSlot = Rc::new(RefCell::new(None));
    let host = WebHost {
        window: window.clone(),
        section: section.clone(),
        canvas,
        ctx: painter.context().clone(),
        tick: tick.clone(),
        handle: None,
    };
    let lifecycle =
        Lifecycle::new(false, StdRng::from_entropy()).with_resize_quiet(opts.resize_debounce);
    let animation = Rc::new(RefCell::new(Animation {
        lifecycle,
        host,
        painter,
    }));

    let animation_tick = animation.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        animation_tick.borrow_mut().on_frame();
    }) as Box<dyn FnMut()>));

    events::wire_visibility(&section, opts.threshold(), animation.clone())?;
    events::wire_resize(&window, opts.debounce_ms(), animation)?;
    log::info!("section animation attached to #{}", opts.section_id);
    Ok(())
}
