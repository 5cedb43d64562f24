//! Procedural planet colors.

use std::fmt;

use crate::core::rng::RandomSource;

/// 8-bit sRGB triple. Displays as a CSS `rgb(r,g,b)` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// HSV to RGB. `h` in degrees, `s` and `v` in [0, 1].
///
/// Branch-free form: each channel folds its offset into the hue sextant with
/// `max(min(k, 4 - k, 1), 0)` instead of matching on the six 60° sectors.
pub fn hsv(h: f32, s: f32, v: f32) -> Rgb {
    let channel = |n: f32| {
        let k = (n + h / 60.0).rem_euclid(6.0);
        let level = v - v * s * k.min(4.0 - k).min(1.0).max(0.0);
        (level * 255.0).round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(channel(5.0), channel(3.0), channel(1.0))
}

/// Three shades of one planet, highlight to shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetPalette {
    pub light: Rgb,
    pub mid: Rgb,
    pub dark: Rgb,
}

impl PlanetPalette {
    /// Shades around a base hue in degrees.
    pub fn from_hue(hue: f32) -> Self {
        Self {
            light: hsv((hue + 40.0).rem_euclid(360.0), 0.25, 1.0),
            mid: hsv(hue.rem_euclid(360.0), 0.65, 0.95),
            dark: hsv((hue + 300.0).rem_euclid(360.0), 0.65, 0.35),
        }
    }

    /// Green/cyan base hue; half the time pushed toward warm tones.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let mut hue = rng.range(160.0, 220.0);
        if rng.chance(0.5) {
            hue += rng.range(-140.0, -40.0);
        }
        Self::from_hue(hue)
    }

    /// CSS background for the planet body, lit from the upper left.
    pub fn css_background(&self) -> String {
        format!(
            "radial-gradient(circle at 30% 30%, {}, {} 45%, {} 80%, #000 105%)",
            self.light, self.mid, self.dark
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::tests::Scripted;
    use crate::core::rng::Rng;

    #[test]
    fn primaries() {
        assert_eq!(hsv(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(hsv(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn zero_saturation_is_white() {
        for h in [0.0, 37.5, 90.0, 181.0, 359.9] {
            assert_eq!(hsv(h, 0.0, 1.0), Rgb::new(255, 255, 255));
        }
    }

    #[test]
    fn secondaries_and_wraparound() {
        assert_eq!(hsv(60.0, 1.0, 1.0), Rgb::new(255, 255, 0));
        assert_eq!(hsv(180.0, 1.0, 1.0), Rgb::new(0, 255, 255));
        assert_eq!(hsv(300.0, 1.0, 1.0), Rgb::new(255, 0, 255));
        assert_eq!(hsv(360.0, 1.0, 1.0), hsv(0.0, 1.0, 1.0));
    }

    #[test]
    fn black_at_zero_value() {
        assert_eq!(hsv(200.0, 0.7, 0.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn rgb_displays_as_css() {
        assert_eq!(Rgb::new(12, 0, 255).to_string(), "rgb(12,0,255)");
    }

    #[test]
    fn light_shade_is_brightest() {
        let mut rng = Rng::new(11);
        for _ in 0..50 {
            let p = PlanetPalette::random(&mut rng);
            let sum = |c: Rgb| c.r as u32 + c.g as u32 + c.b as u32;
            assert!(sum(p.light) > sum(p.dark));
        }
    }

    #[test]
    fn unshifted_hue_stays_cool() {
        // 0.5 → hue 190, 0.9 → no warm shift.
        let mut rng = Scripted::new(&[0.5, 0.9]);
        let palette = PlanetPalette::random(&mut rng);
        assert_eq!(palette, PlanetPalette::from_hue(190.0));
        assert!(palette.mid.b > palette.mid.r);
    }

    #[test]
    fn background_lists_all_shades() {
        let palette = PlanetPalette::from_hue(180.0);
        let css = palette.css_background();
        assert!(css.starts_with("radial-gradient(circle at 30% 30%, rgb("));
        assert!(css.contains(&format!("{} 45%", palette.mid)));
        assert!(css.ends_with("#000 105%)"));
    }
}
