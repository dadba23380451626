//! `CanvasRenderingContext2d` backing for [`garden_core::Surface`].
//!
//! Canvas calls that can throw (transforms, arcs, radial gradients) only do
//! so for non-finite or negative inputs. Their errors are dropped and the
//! frame carries on with the remaining calls.

use garden_core::{Gradient, Paint, Surface};
use glam::DVec2;
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    fn gradient(&self, g: &Gradient) -> Option<web::CanvasGradient> {
        let grad = match g {
            Gradient::Linear { from, to, .. } => {
                self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y)
            }
            Gradient::Radial {
                inner,
                inner_radius,
                outer,
                outer_radius,
                ..
            } => match self.ctx.create_radial_gradient(
                inner.x,
                inner.y,
                *inner_radius,
                outer.x,
                outer.y,
                *outer_radius,
            ) {
                Ok(grad) => grad,
                Err(e) => {
                    log::debug!("radial gradient rejected: {:?}", e);
                    return None;
                }
            },
        };
        for stop in g.stops() {
            _ = grad.add_color_stop(stop.offset as f32, &stop.color.to_css());
        }
        Some(grad)
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }

    fn save(&mut self) {
        self.ctx.save();
    }
    fn restore(&mut self) {
        self.ctx.restore();
    }
    fn translate(&mut self, offset: DVec2) {
        _ = self.ctx.translate(offset.x, offset.y);
    }
    fn rotate(&mut self, angle: f64) {
        _ = self.ctx.rotate(angle);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }
    fn close_path(&mut self) {
        self.ctx.close_path();
    }
    fn move_to(&mut self, p: DVec2) {
        self.ctx.move_to(p.x, p.y);
    }
    fn bezier_curve_to(&mut self, c1: DVec2, c2: DVec2, p: DVec2) {
        self.ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
    }
    fn quadratic_curve_to(&mut self, c: DVec2, p: DVec2) {
        self.ctx.quadratic_curve_to(c.x, c.y, p.x, p.y);
    }
    fn arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64) {
        _ = self.ctx.arc(center.x, center.y, radius, start, end);
    }
    fn ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64, start: f64, end: f64) {
        _ = self
            .ctx
            .ellipse(center.x, center.y, radii.x, radii.y, rotation, start, end);
    }

    fn clear_rect(&mut self, origin: DVec2, size: DVec2) {
        self.ctx.clear_rect(origin.x, origin.y, size.x, size.y);
    }
    fn fill_rect(&mut self, origin: DVec2, size: DVec2) {
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }
    fn fill(&mut self) {
        self.ctx.fill();
    }
    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_fill(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.to_css()),
            Paint::Gradient(g) => {
                if let Some(grad) = self.gradient(g) {
                    self.ctx.set_fill_style_canvas_gradient(&grad);
                }
            }
        }
    }
    fn set_stroke(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_stroke_style_str(&c.to_css()),
            Paint::Gradient(g) => {
                if let Some(grad) = self.gradient(g) {
                    self.ctx.set_stroke_style_canvas_gradient(&grad);
                }
            }
        }
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }
    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }
}
