//! Falling starfield with depth-scaled motion.
//!
//! Stars drift mostly downward; their depth multiplies both velocity and
//! painted size, so near stars fall faster and look larger and brighter.

use glam::Vec2;

use crate::core::rng::RandomSource;
use crate::core::viewport::Viewport;
use crate::renderer::instance::{StarBuffer, StarInstance};
use crate::renderer::traits::RadialGlow;

/// Hard cap on the number of stars regardless of viewport size.
pub const MAX_STARS: usize = 420;
/// Square pixels of viewport per star.
pub const AREA_PER_STAR: f64 = 4800.0;
/// How far past each edge a star may travel before wrapping.
pub const WRAP_MARGIN: f32 = 10.0;
/// Per-star, per-frame chance of a twinkle repaint.
pub const TWINKLE_CHANCE: f32 = 0.004;

/// Star count for a viewport: one per 4800 px², at most 420.
pub fn star_count(viewport: Viewport) -> usize {
    let n = (viewport.area() / AREA_PER_STAR).floor();
    if n.is_finite() && n > 0.0 {
        (n as usize).min(MAX_STARS)
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// In [0.3, 1.3). Scales velocity and painted radius.
    pub depth: f32,
    /// Base radius in [0.25, 1.85).
    pub radius: f32,
    pub vel: Vec2,
}

impl Star {
    pub fn random(viewport: Viewport, rng: &mut impl RandomSource) -> Self {
        let pos = Vec2::new(
            rng.next_unit() * viewport.width,
            rng.next_unit() * viewport.height,
        );
        let depth = rng.range(0.3, 1.3);
        let radius = rng.range(0.25, 1.85);
        let vel = Vec2::new(rng.range(-0.1, 0.1), rng.range(0.18, 0.68));
        Self { pos, depth, radius, vel }
    }

    /// Displacement applied by one step.
    pub fn displacement(&self) -> Vec2 {
        self.vel * self.depth
    }

    fn advance(&mut self, viewport: Viewport, rng: &mut impl RandomSource) {
        self.pos += self.displacement();

        if self.pos.y > viewport.height + WRAP_MARGIN {
            self.pos.y = -WRAP_MARGIN;
            self.pos.x = rng.next_unit() * viewport.width;
        }
        if self.pos.x < -WRAP_MARGIN {
            self.pos.x = viewport.width + WRAP_MARGIN;
        }
        if self.pos.x > viewport.width + WRAP_MARGIN {
            self.pos.x = -WRAP_MARGIN;
        }
    }

    fn instance(&self, twinkle: bool) -> StarInstance {
        StarInstance {
            x: self.pos.x,
            y: self.pos.y,
            radius: self.radius * self.depth,
            alpha: 0.5 + self.depth * 0.5,
            twinkle: if twinkle { 1.0 } else { 0.0 },
        }
    }
}

/// The two fixed background glows for a viewport.
pub fn background_glows(viewport: Viewport) -> [RadialGlow; 2] {
    let reach = viewport.longest_side();
    [
        RadialGlow {
            center: viewport.at(0.15, 0.05),
            radius: reach * 0.6,
            inner: "rgba(0,255,179,0.05)",
        },
        RadialGlow {
            center: viewport.at(0.85, 0.15),
            radius: reach * 0.7,
            inner: "rgba(124,249,255,0.04)",
        },
    ]
}

pub struct Starfield {
    viewport: Viewport,
    stars: Vec<Star>,
    glows: [RadialGlow; 2],
}

impl Starfield {
    pub fn new(viewport: Viewport, rng: &mut impl RandomSource) -> Self {
        let mut field = Self {
            viewport,
            stars: Vec::new(),
            glows: background_glows(viewport),
        };
        field.resize(viewport, rng);
        field
    }

    /// Regenerate the whole star set for a new viewport.
    pub fn resize(&mut self, viewport: Viewport, rng: &mut impl RandomSource) {
        let count = star_count(viewport);
        self.viewport = viewport;
        self.glows = background_glows(viewport);
        self.stars.clear();
        self.stars.reserve(count);
        for _ in 0..count {
            self.stars.push(Star::random(viewport, rng));
        }
        log::debug!(
            "starfield: {} stars for {}x{}",
            count,
            viewport.width,
            viewport.height
        );
    }

    /// Advance every star by one frame and wrap it back into bounds.
    pub fn step(&mut self, rng: &mut impl RandomSource) {
        let viewport = self.viewport;
        for star in &mut self.stars {
            star.advance(viewport, rng);
        }
    }

    /// Write this frame's instances, rolling the twinkle dice per star.
    pub fn build_frame(&self, rng: &mut impl RandomSource, buffer: &mut StarBuffer) {
        buffer.clear();
        for star in &self.stars {
            buffer.push(star.instance(rng.chance(TWINKLE_CHANCE)));
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub fn glows(&self) -> &[RadialGlow] {
        &self.glows
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
