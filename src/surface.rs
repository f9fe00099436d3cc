use backdrop_core::constants::HALO_MID_STOP;
use backdrop_core::{Disc, Halo, Surface, Viewport};
use std::f64::consts::TAU;
use web_sys as web;

/// Canvas 2D painter. Draws in CSS pixels; the transform maps them onto the
/// DPR-scaled backing store.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
    css_width: f64,
    css_height: f64,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d, dpr: f64, viewport: Viewport) -> Self {
        let mut surface = Self {
            ctx,
            dpr: 1.0,
            css_width: 0.0,
            css_height: 0.0,
        };
        surface.resize(dpr, viewport);
        surface
    }

    pub fn resize(&mut self, dpr: f64, viewport: Viewport) {
        self.dpr = dpr;
        self.css_width = viewport.width as f64;
        self.css_height = viewport.height as f64;
    }

    fn circle(&self, x: f64, y: f64, r: f64) {
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, r, 0.0, TAU);
        self.ctx.fill();
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        // Resizing the canvas resets its state, so reapply the transform every frame.
        _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, self.css_width, self.css_height);
    }

    fn fill_halo(&mut self, halo: &Halo) {
        let (x, y, r) = (halo.center.x as f64, halo.center.y as f64, halo.radius as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(g) => g,
            Err(e) => {
                log::debug!("[surface] radial gradient failed: {:?}", e);
                return;
            }
        };
        _ = gradient.add_color_stop(0.0, &halo.color.css_hex_alpha(halo.alpha));
        _ = gradient.add_color_stop(HALO_MID_STOP, &halo.color.css_hex_alpha(halo.alpha * 0.5));
        _ = gradient.add_color_stop(1.0, &halo.color.css_hex_alpha(0.0));
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.circle(x, y, r);
    }

    fn fill_disc(&mut self, disc: &Disc) {
        self.ctx.set_global_alpha(disc.alpha as f64);
        self.ctx.set_fill_style_str(&disc.color.css_hex());
        self.circle(disc.center.x as f64, disc.center.y as f64, disc.radius as f64);
        self.ctx.set_global_alpha(1.0);
    }
}
