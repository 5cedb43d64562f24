use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunables for the planet field, fixed at startup.
///
/// Every field has a default, so a JSON override only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// Fewest planets generated (inclusive). Together with `planets_max` this
    /// shapes how crowded the page looks.
    pub planets_min: u32,
    /// Most planets generated (inclusive).
    pub planets_max: u32,
    /// Smallest orbit radius in px for a 200 px planet; scaled by size.
    pub orbit_min: f32,
    /// Largest orbit radius in px for a 200 px planet; scaled by size.
    pub orbit_max: f32,
    /// Base anchor drift in px per frame. Higher values make planets wander faster.
    pub drift_speed: f32,
    /// Parallax displacement in px per unit of depth at the viewport edge.
    /// Higher values make planets react more strongly to the pointer.
    pub parallax: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            planets_min: 8,
            planets_max: 12,
            orbit_min: 30.0,
            orbit_max: 120.0,
            drift_speed: 0.02,
            parallax: 18.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backdrop config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field}: min {min} exceeds max {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{field} must be a finite, non-negative number")]
    Negative { field: &'static str },
}

impl BackdropConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("orbit_min", self.orbit_min),
            ("orbit_max", self.orbit_max),
            ("drift_speed", self.drift_speed),
            ("parallax", self.parallax),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field });
            }
        }
        if self.planets_min > self.planets_max {
            return Err(ConfigError::InvertedRange {
                field: "planets",
                min: self.planets_min as f32,
                max: self.planets_max as f32,
            });
        }
        if self.orbit_min > self.orbit_max {
            return Err(ConfigError::InvertedRange {
                field: "orbit",
                min: self.orbit_min,
                max: self.orbit_max,
            });
        }
        Ok(())
    }
}
