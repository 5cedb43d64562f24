pub mod color;
pub mod glow;
pub mod planets;
pub mod starfield;
