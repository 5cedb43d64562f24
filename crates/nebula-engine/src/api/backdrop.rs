use glam::Vec2;

use crate::api::config::BackdropConfig;
use crate::core::rng::{RandomSource, Rng};
use crate::core::time::FrameClock;
use crate::core::viewport::Viewport;
use crate::renderer::instance::StarBuffer;
use crate::renderer::traits::{PlanetSurface, StarCanvas, StarFrame};
use crate::systems::planets::PlanetField;
use crate::systems::starfield::Starfield;

/// All backdrop state: the optional starfield, the planet field, and the
/// clock and RNG that drive them.
///
/// The host owns one of these, calls `tick` from its frame callback, and
/// forwards resize and pointer events. Drawing goes through the render sinks.
pub struct Backdrop<R: RandomSource = Rng> {
    config: BackdropConfig,
    viewport: Viewport,
    clock: FrameClock,
    rng: R,
    starfield: Option<Starfield>,
    planets: PlanetField,
    star_buffer: StarBuffer,
}

impl<R: RandomSource> Backdrop<R> {
    /// Generate the planet field. The starfield stays off until a canvas is
    /// available; see `enable_starfield`.
    pub fn new(config: BackdropConfig, viewport: Viewport, mut rng: R) -> Self {
        let planets = PlanetField::spawn(&config, viewport, &mut rng);
        Self {
            config,
            viewport,
            clock: FrameClock::default(),
            rng,
            starfield: None,
            planets,
            star_buffer: StarBuffer::new(),
        }
    }

    pub fn with_clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn enable_starfield(&mut self) {
        if self.starfield.is_none() {
            self.starfield = Some(Starfield::new(self.viewport, &mut self.rng));
        }
    }

    pub fn has_starfield(&self) -> bool {
        self.starfield.is_some()
    }

    /// New viewport: regenerate the stars. Planets keep their anchors and
    /// wrap against the new bounds from the next step on.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(field) = &mut self.starfield {
            field.resize(viewport, &mut self.rng);
        }
    }

    /// Advance the animation by `elapsed` seconds. Returns the number of
    /// fixed steps that ran.
    pub fn tick(&mut self, elapsed: f32) -> u32 {
        let steps = self.clock.advance(elapsed);
        for _ in 0..steps {
            self.step();
        }
        steps
    }

    /// One fixed animation step for every system.
    pub fn step(&mut self) {
        if let Some(field) = &mut self.starfield {
            field.step(&mut self.rng);
        }
        self.planets.step(self.viewport);
    }

    /// Paint the current starfield frame. No-op without a starfield.
    pub fn draw_stars(&mut self, canvas: &mut impl StarCanvas) {
        let Some(field) = &self.starfield else {
            return;
        };
        field.build_frame(&mut self.rng, &mut self.star_buffer);
        canvas.draw(&StarFrame {
            viewport: field.viewport(),
            glows: field.glows(),
            stars: &self.star_buffer.instances,
        });
    }

    /// Create one element per planet. Call once after construction.
    pub fn mount_planets(&self, surface: &mut impl PlanetSurface) {
        for (i, planet) in self.planets.iter().enumerate() {
            surface.mount(i, planet);
            surface.place(i, planet.position());
        }
    }

    /// Write every planet's orbit-composed position.
    pub fn present_planets(&self, surface: &mut impl PlanetSurface) {
        for (i, planet) in self.planets.iter().enumerate() {
            surface.place(i, planet.position());
        }
    }

    /// Apply pointer parallax to every planet.
    pub fn pointer_moved(&self, pointer: Vec2, surface: &mut impl PlanetSurface) {
        let shifts = self
            .planets
            .parallax(pointer, self.viewport, self.config.parallax);
        for (i, offset) in shifts.enumerate() {
            surface.shift(i, offset);
        }
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn starfield(&self) -> Option<&Starfield> {
        self.starfield.as_ref()
    }

    pub fn planets(&self) -> &PlanetField {
        &self.planets
    }

    pub fn star_buffer(&self) -> &StarBuffer {
        &self.star_buffer
    }
}
