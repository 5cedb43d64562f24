use std::f64::consts::TAU;

use nebula_engine::{RadialGlow, StarCanvas, StarFrame, StarInstance, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// Element id of the starfield canvas.
pub const STAR_CANVAS_ID: &str = "stars";

const STAR_FILL: &str = "255,255,255";
const TWINKLE_BLUR: f64 = 14.0;
const TWINKLE_COLOR: &str = "#7cf9ff";

/// Canvas 2D implementation of the starfield sink.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `#stars` and its 2D context. `None` if either is missing, in
    /// which case the starfield simply never runs.
    pub fn acquire(document: &Document) -> Option<Self> {
        let canvas = document
            .get_element_by_id(STAR_CANVAS_ID)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    #[allow(deprecated)]
    fn paint_glow(&self, glow: &RadialGlow, viewport: Viewport) {
        let (x, y) = (glow.center.x as f64, glow.center.y as f64);
        let Ok(gradient) = self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, glow.radius as f64)
        else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, glow.inner);
        let _ = gradient.add_color_stop(1.0, RadialGlow::OUTER);
        self.ctx.set_fill_style(&gradient);
        self.ctx
            .fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    #[allow(deprecated)]
    fn paint_star(&self, star: &StarInstance) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            star.x as f64,
            star.y as f64,
            star.radius as f64,
            0.0,
            TAU,
        );
        self.ctx
            .set_fill_style(&JsValue::from_str(&format!("rgba({STAR_FILL},{})", star.alpha)));
        self.ctx.fill();

        // Twinkle: refill the same path with a glow for this frame only.
        if star.is_twinkling() {
            self.ctx.set_shadow_blur(TWINKLE_BLUR);
            self.ctx.set_shadow_color(TWINKLE_COLOR);
            self.ctx.fill();
            self.ctx.set_shadow_blur(0.0);
        }
    }
}

impl StarCanvas for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
    }

    fn draw(&mut self, frame: &StarFrame) {
        let vp = frame.viewport;
        self.ctx
            .clear_rect(0.0, 0.0, vp.width as f64, vp.height as f64);
        for glow in frame.glows {
            self.paint_glow(glow, vp);
        }
        for star in frame.stars {
            self.paint_star(star);
        }
    }
}
