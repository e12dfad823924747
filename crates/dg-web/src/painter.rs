use dg_core::{Painter, Rgba};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::error::{js_err, MountError};

/// [`Painter`] over a Canvas 2D context. Canvas errors (e.g. a negative
/// ellipse radius) drop that primitive and keep drawing.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or(MountError::NoContext)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| MountError::NoContext)?;
        Ok(Self { ctx })
    }

    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }
    fn save(&mut self) {
        self.ctx.save();
    }
    fn restore(&mut self) {
        self.ctx.restore();
    }
    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }
    fn rotate(&mut self, radians: f32) {
        let _ = self.ctx.rotate(radians as f64);
    }
    fn scale(&mut self, factor: Vec2) {
        let _ = self.ctx.scale(factor.x as f64, factor.y as f64);
    }
    fn set_fill(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
    }
    fn set_stroke(&mut self, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_string());
    }
    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }
    fn move_to(&mut self, p: Vec2) {
        self.ctx.move_to(p.x as f64, p.y as f64);
    }
    fn line_to(&mut self, p: Vec2) {
        self.ctx.line_to(p.x as f64, p.y as f64);
    }
    fn bezier_curve_to(&mut self, c1: Vec2, c2: Vec2, to: Vec2) {
        self.ctx.bezier_curve_to(
            c1.x as f64,
            c1.y as f64,
            c2.x as f64,
            c2.y as f64,
            to.x as f64,
            to.y as f64,
        );
    }
    fn ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32) {
        let _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x.max(0.0) as f64,
            radii.y.max(0.0) as f64,
            rotation as f64,
            0.0,
            TAU,
        );
    }
    fn circle(&mut self, center: Vec2, radius: f32) {
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
    fn close_path(&mut self) {
        self.ctx.close_path();
    }
    fn fill(&mut self) {
        self.ctx.fill();
    }
    fn stroke(&mut self) {
        self.ctx.stroke();
    }
    fn fill_radial(
        &mut self,
        center: Vec2,
        inner: f32,
        outer: f32,
        inner_color: Rgba,
        outer_color: Rgba,
        width: f32,
        height: f32,
    ) {
        let (cx, cy) = (center.x as f64, center.y as f64);
        let Ok(gradient) = self
            .ctx
            .create_radial_gradient(cx, cy, inner as f64, cx, cy, outer as f64)
        else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, &inner_color.to_string());
        let _ = gradient.add_color_stop(1.0, &outer_color.to_string());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }
}
