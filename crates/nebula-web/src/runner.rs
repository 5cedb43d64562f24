use glam::Vec2;
use nebula_engine::{Backdrop, BackdropConfig, FrameClock, Rng, StarCanvas, Viewport};
use web_sys::Document;

use crate::canvas::CanvasSurface;
use crate::dom::DomPlanets;

/// Owns the engine state together with the DOM sinks it renders into.
///
/// A single runner lives in the crate's `thread_local!`; the frame loop and
/// event listeners reach it through `with_runner`.
pub struct BackdropRunner {
    backdrop: Backdrop<Rng>,
    canvas: Option<CanvasSurface>,
    planets: DomPlanets,
    /// Timestamp of the previous animation frame, in milliseconds.
    last_frame: Option<f64>,
}

impl BackdropRunner {
    pub fn new(config: BackdropConfig, viewport: Viewport, document: Document, seed: u64) -> Self {
        let mut backdrop = Backdrop::new(config, viewport, Rng::new(seed));

        let mut canvas = CanvasSurface::acquire(&document);
        match &mut canvas {
            Some(surface) => {
                surface.resize(viewport);
                backdrop.enable_starfield();
            }
            None => log::debug!("starfield: no #stars canvas, skipped"),
        }

        let mut planets = DomPlanets::new(document);
        backdrop.mount_planets(&mut planets);

        Self {
            backdrop,
            canvas,
            planets,
            last_frame: None,
        }
    }

    /// Run one animation frame at `timestamp` (ms, from `requestAnimationFrame`).
    pub fn frame(&mut self, timestamp: f64) {
        let elapsed = match self.last_frame {
            Some(prev) => ((timestamp - prev) / 1000.0) as f32,
            None => FrameClock::DEFAULT_STEP,
        };
        self.last_frame = Some(timestamp);

        self.backdrop.tick(elapsed);
        if let Some(canvas) = &mut self.canvas {
            self.backdrop.draw_stars(canvas);
        }
        self.backdrop.present_planets(&mut self.planets);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(canvas) = &mut self.canvas {
            canvas.resize(viewport);
        }
        self.backdrop.resize(viewport);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.backdrop
            .pointer_moved(Vec2::new(x, y), &mut self.planets);
    }

    pub fn star_instances_ptr(&self) -> *const f32 {
        self.backdrop.star_buffer().instances_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.backdrop.star_buffer().instance_count()
    }

    pub fn planet_count(&self) -> u32 {
        self.backdrop.planets().len() as u32
    }
}
