pub mod instance;
pub mod traits;

pub use instance::{StarBuffer, StarInstance};
pub use traits::{PlanetSurface, RadialGlow, StarCanvas, StarFrame};
