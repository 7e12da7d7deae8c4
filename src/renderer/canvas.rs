//! 2D canvas rendering of the confetti pool

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::confetti::{Confetti, PALETTE};

/// Owns the full-viewport canvas and its 2D context
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Bind to a canvas. Returns `None` when no 2D context is available,
    /// in which case the celebration simply has nothing to draw on.
    pub fn new(canvas: HtmlCanvasElement, use_worker: bool) -> Option<Self> {
        if use_worker {
            // No worker-backed surface is wired up; the preference falls
            // back to the main thread
            log::debug!("worker rendering preferred but unavailable; using main thread");
        }
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Commit new pixel buffer dimensions to the canvas
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Draw the current pool, clearing the previous frame
    pub fn render(&self, engine: &Confetti) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        for p in engine.particles() {
            let pos = p.render_pos();
            self.ctx.save();
            self.ctx.set_global_alpha(p.opacity() as f64);
            self.ctx.set_fill_style_str(PALETTE[p.color]);
            let _ = self.ctx.translate(pos.x as f64, pos.y as f64);
            let _ = self.ctx.rotate(p.wobble_phase as f64);
            // Rectangular flake, twice as wide as tall
            let s = p.size as f64;
            self.ctx.fill_rect(-s, -s / 2.0, s * 2.0, s);
            self.ctx.restore();
        }
    }
}
