pub mod api;
pub mod core;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::backdrop::Backdrop;
pub use api::config::{BackdropConfig, ConfigError};
pub use crate::core::rng::{RandomSource, Rng};
pub use crate::core::time::FrameClock;
pub use crate::core::viewport::Viewport;
pub use renderer::instance::{StarBuffer, StarInstance};
pub use renderer::traits::{PlanetSurface, RadialGlow, StarCanvas, StarFrame};
pub use systems::color::{hsv, PlanetPalette, Rgb};
pub use systems::glow::{card_sweep, hover_properties, local_pointer, CardSweep, ElementRect};
pub use systems::planets::{Planet, PlanetField};
pub use systems::starfield::{star_count, Star, Starfield};
