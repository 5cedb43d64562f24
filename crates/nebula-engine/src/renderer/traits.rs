//! Render sinks.
//!
//! The engine never touches the DOM. The web crate implements these traits
//! over a 2D canvas context and absolutely positioned `<div>`s; tests
//! implement them with plain recorders.

use glam::Vec2;

use super::instance::StarInstance;
use crate::core::viewport::Viewport;
use crate::systems::planets::Planet;

/// A soft radial color glow painted behind the stars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGlow {
    pub center: Vec2,
    pub radius: f32,
    /// CSS color at the center; the glow fades to transparent at `radius`.
    pub inner: &'static str,
}

impl RadialGlow {
    pub const OUTER: &'static str = "rgba(0,0,0,0)";
}

/// Everything the starfield paints in one frame, in paint order.
pub struct StarFrame<'a> {
    pub viewport: Viewport,
    pub glows: &'a [RadialGlow],
    pub stars: &'a [StarInstance],
}

/// Paints starfield frames onto a raster surface.
pub trait StarCanvas {
    /// Match the backing store to a new viewport.
    fn resize(&mut self, viewport: Viewport);

    /// Clear, paint the glows, then the stars.
    fn draw(&mut self, frame: &StarFrame);
}

/// Places planet elements on the page.
pub trait PlanetSurface {
    /// Create the element for planet `index`. Called once per planet.
    fn mount(&mut self, index: usize, planet: &Planet);

    /// Set the orbit-composed position (top-left corner) of planet `index`.
    fn place(&mut self, index: usize, pos: Vec2);

    /// Set the parallax translation layered on top of the position.
    fn shift(&mut self, index: usize, offset: Vec2);
}
