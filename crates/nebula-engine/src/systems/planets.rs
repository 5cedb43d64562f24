//! Drifting, orbiting planets with pointer parallax.
//!
//! Each planet circles an anchor point that itself drifts slowly across the
//! page. Parallax is a separate translation derived from the pointer and the
//! planet's depth; it never feeds back into the anchor or orbit.

use std::f32::consts::TAU;

use glam::Vec2;

use super::color::PlanetPalette;
use crate::api::config::BackdropConfig;
use crate::core::rng::RandomSource;
use crate::core::viewport::Viewport;

/// How far past each edge an anchor may drift before wrapping.
pub const ANCHOR_MARGIN: f32 = 200.0;
/// Planet size at which the configured orbit range applies unscaled.
pub const REFERENCE_SIZE: f32 = 200.0;
pub const SIZE_MIN: f32 = 90.0;
pub const SIZE_MAX: f32 = 260.0;
pub const DEPTH_MIN: f32 = 0.10;
pub const DEPTH_MAX: f32 = 0.35;

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Diameter in px.
    pub size: f32,
    pub palette: PlanetPalette,
    /// Center of the orbit; drifts every step.
    pub anchor: Vec2,
    /// Anchor velocity in px per step.
    pub drift: Vec2,
    /// Orbital angle in radians.
    pub phase: f32,
    /// Radians per step.
    pub angular_speed: f32,
    pub orbit_radius: f32,
    /// Parallax weight, two decimals in [0.10, 0.35].
    pub depth: f32,
    pub ringed: bool,
}

impl Planet {
    pub fn random(
        config: &BackdropConfig,
        viewport: Viewport,
        rng: &mut impl RandomSource,
    ) -> Self {
        let size = rng.range(SIZE_MIN, SIZE_MAX);
        let palette = PlanetPalette::random(rng);
        let anchor = Vec2::new(
            rng.range(0.05 * viewport.width, 0.8 * viewport.width),
            rng.range(0.05 * viewport.height, 0.8 * viewport.height),
        );
        let depth = (rng.range(DEPTH_MIN, DEPTH_MAX) * 100.0).round() / 100.0;
        let orbit_radius = rng.range(config.orbit_min, config.orbit_max) * (size / REFERENCE_SIZE);
        let drift = Vec2::new(
            rng.sign() * config.drift_speed * rng.range(0.5, 1.5),
            rng.sign() * config.drift_speed * rng.range(0.5, 1.5),
        );
        let phase = rng.range(0.0, TAU);
        let angular_speed = rng.range(0.002, 0.006);

        Self {
            size,
            palette,
            anchor,
            drift,
            phase,
            angular_speed,
            orbit_radius,
            depth,
            ringed: false,
        }
    }

    /// Rendered position: anchor plus the orbit offset at the current phase.
    pub fn position(&self) -> Vec2 {
        self.anchor + self.orbit_radius * Vec2::new(self.phase.cos(), self.phase.sin())
    }

    /// Parallax translation for a normalized pointer offset.
    pub fn parallax_shift(&self, offset: Vec2, strength: f32) -> Vec2 {
        Vec2::new(
            offset.x * -strength * self.depth,
            offset.y * -strength * self.depth,
        )
    }

    /// `data-depth` attribute value.
    pub fn depth_attr(&self) -> String {
        format!("{:.2}", self.depth)
    }

    fn advance(&mut self, viewport: Viewport) {
        self.anchor += self.drift;
        self.anchor.x = wrap_axis(self.anchor.x, viewport.width);
        self.anchor.y = wrap_axis(self.anchor.y, viewport.height);
        self.phase += self.angular_speed;
    }
}

fn wrap_axis(v: f32, extent: f32) -> f32 {
    if v < -ANCHOR_MARGIN {
        extent + ANCHOR_MARGIN
    } else if v > extent + ANCHOR_MARGIN {
        -ANCHOR_MARGIN
    } else {
        v
    }
}

pub struct PlanetField {
    planets: Vec<Planet>,
}

impl PlanetField {
    /// Generate the planet set and mark one planet as ringed.
    pub fn spawn(
        config: &BackdropConfig,
        viewport: Viewport,
        rng: &mut impl RandomSource,
    ) -> Self {
        let span = (config.planets_max.saturating_sub(config.planets_min) + 1) as usize;
        let count = config.planets_min as usize + rng.index(span).unwrap_or(0);

        let mut planets: Vec<Planet> = (0..count)
            .map(|_| Planet::random(config, viewport, rng))
            .collect();

        if let Some(i) = rng.index(planets.len()) {
            planets[i].ringed = true;
        }

        log::debug!("planets: spawned {}", planets.len());
        Self { planets }
    }

    /// Build a field from existing planets, leaving ring flags untouched.
    pub fn from_planets(planets: Vec<Planet>) -> Self {
        Self { planets }
    }

    /// Drift every anchor, wrap it at the margin, and advance the orbit.
    pub fn step(&mut self, viewport: Viewport) {
        for planet in &mut self.planets {
            planet.advance(viewport);
        }
    }

    /// Parallax translations for a pointer position, one per planet.
    pub fn parallax<'a>(
        &'a self,
        pointer: Vec2,
        viewport: Viewport,
        strength: f32,
    ) -> impl Iterator<Item = Vec2> + 'a {
        let offset = viewport.centered_offset(pointer);
        self.planets
            .iter()
            .map(move |p| p.parallax_shift(offset, strength))
    }

    pub fn position(&self, index: usize) -> Option<Vec2> {
        self.planets.get(index).map(Planet::position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter()
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::tests::Scripted;
    use crate::core::rng::Rng;

    fn still_planet(anchor: Vec2, drift: Vec2) -> Planet {
        Planet {
            size: 200.0,
            palette: PlanetPalette::from_hue(180.0),
            anchor,
            drift,
            phase: 0.0,
            angular_speed: 0.0,
            orbit_radius: 0.0,
            depth: 0.2,
            ringed: false,
        }
    }

    #[test]
    fn count_stays_within_config() {
        let config = BackdropConfig::default();
        let vp = Viewport::new(1280.0, 720.0);
        for seed in 1..200 {
            let field = PlanetField::spawn(&config, vp, &mut Rng::new(seed));
            assert!((8..=12).contains(&field.len()), "seed {seed}: {}", field.len());
        }
    }

    #[test]
    fn count_reaches_both_bounds() {
        let config = BackdropConfig::default();
        let vp = Viewport::new(800.0, 600.0);
        let low = PlanetField::spawn(&config, vp, &mut Scripted::new(&[0.0]));
        let high = PlanetField::spawn(&config, vp, &mut Scripted::new(&[0.999]));
        assert_eq!(low.len(), 8);
        assert_eq!(high.len(), 12);
    }

    #[test]
    fn exactly_one_ring() {
        let config = BackdropConfig::default();
        for seed in 1..100 {
            let field = PlanetField::spawn(&config, Viewport::new(1024.0, 768.0), &mut Rng::new(seed));
            assert_eq!(field.iter().filter(|p| p.ringed).count(), 1);
        }
    }

    #[test]
    fn empty_field_has_no_ring() {
        let config = BackdropConfig {
            planets_min: 0,
            planets_max: 0,
            ..Default::default()
        };
        let field = PlanetField::spawn(&config, Viewport::new(640.0, 480.0), &mut Rng::new(8));
        assert!(field.is_empty());
        assert_eq!(field.position(0), None);
    }

    #[test]
    fn generated_planets_respect_ranges() {
        let config = BackdropConfig::default();
        let vp = Viewport::new(1000.0, 1000.0);
        let field = PlanetField::spawn(&config, vp, &mut Rng::new(21));
        for p in field.iter() {
            assert!((SIZE_MIN..SIZE_MAX).contains(&p.size));
            assert!((DEPTH_MIN..=DEPTH_MAX).contains(&p.depth));
            assert!((50.0..800.0).contains(&p.anchor.x));
            assert!((50.0..800.0).contains(&p.anchor.y));
            let scale = p.size / REFERENCE_SIZE;
            assert!(p.orbit_radius >= config.orbit_min * scale - 1e-3);
            assert!(p.orbit_radius <= config.orbit_max * scale + 1e-3);
            assert!((0.01..=0.03).contains(&p.drift.x.abs()));
            assert!((0.002..0.006).contains(&p.angular_speed));
        }
    }

    #[test]
    fn depth_rounds_to_two_decimals() {
        let config = BackdropConfig::default();
        let field = PlanetField::spawn(&config, Viewport::new(900.0, 700.0), &mut Rng::new(4));
        for p in field.iter() {
            let attr = p.depth_attr();
            assert_eq!(attr.len(), 4, "{attr}");
            assert_eq!(attr.parse::<f32>().unwrap(), p.depth);
        }
    }

    #[test]
    fn anchor_wraps_at_margin() {
        let vp = Viewport::new(500.0, 400.0);
        let mut field = PlanetField::from_planets(vec![
            still_planet(Vec2::new(-199.99, 10.0), Vec2::new(-0.02, 0.0)),
            still_planet(Vec2::new(699.99, 10.0), Vec2::new(0.02, 0.0)),
            still_planet(Vec2::new(10.0, -199.99), Vec2::new(0.0, -0.02)),
            still_planet(Vec2::new(10.0, 599.99), Vec2::new(0.0, 0.02)),
        ]);
        field.step(vp);
        let anchors: Vec<Vec2> = field.iter().map(|p| p.anchor).collect();
        assert_eq!(anchors[0].x, 700.0);
        assert_eq!(anchors[1].x, -200.0);
        assert_eq!(anchors[2].y, 600.0);
        assert_eq!(anchors[3].y, -200.0);
    }

    #[test]
    fn anchors_stay_in_margin_over_time() {
        let config = BackdropConfig {
            drift_speed: 25.0,
            ..Default::default()
        };
        let vp = Viewport::new(640.0, 480.0);
        let mut field = PlanetField::spawn(&config, vp, &mut Rng::new(13));
        for _ in 0..5_000 {
            field.step(vp);
            for p in field.iter() {
                assert!((-ANCHOR_MARGIN..=vp.width + ANCHOR_MARGIN).contains(&p.anchor.x));
                assert!((-ANCHOR_MARGIN..=vp.height + ANCHOR_MARGIN).contains(&p.anchor.y));
            }
        }
    }

    #[test]
    fn position_composes_anchor_and_orbit() {
        let config = BackdropConfig::default();
        let vp = Viewport::new(1200.0, 800.0);
        let mut field = PlanetField::spawn(&config, vp, &mut Rng::new(31));
        for _ in 0..250 {
            field.step(vp);
        }
        // Parallax is a pure query; it must not disturb the composed position.
        let _: Vec<Vec2> = field.parallax(Vec2::new(10.0, 700.0), vp, config.parallax).collect();
        for (i, p) in field.iter().enumerate() {
            let expected = p.anchor + p.orbit_radius * Vec2::new(p.phase.cos(), p.phase.sin());
            assert_eq!(field.position(i), Some(expected));
        }
    }

    #[test]
    fn phase_advances_by_angular_speed() {
        let mut planet = still_planet(Vec2::new(100.0, 100.0), Vec2::ZERO);
        planet.angular_speed = 0.25;
        planet.orbit_radius = 40.0;
        let mut field = PlanetField::from_planets(vec![planet]);
        field.step(Viewport::new(400.0, 400.0));
        field.step(Viewport::new(400.0, 400.0));
        let p = field.iter().next().unwrap();
        assert_eq!(p.phase, 0.5);
        let pos = field.position(0).unwrap();
        assert!(pos.abs_diff_eq(Vec2::new(100.0 + 40.0 * 0.5f32.cos(), 100.0 + 40.0 * 0.5f32.sin()), 1e-4));
    }

    #[test]
    fn parallax_sign_and_magnitude() {
        let vp = Viewport::new(1000.0, 800.0);
        let mut planet = still_planet(Vec2::ZERO, Vec2::ZERO);
        planet.depth = 0.3;
        let field = PlanetField::from_planets(vec![planet]);
        let pointer = Vec2::new(750.0, 200.0);
        let shift = field.parallax(pointer, vp, 18.0).next().unwrap();
        let (mx, my) = (750.0f32 / 1000.0 - 0.5, 200.0f32 / 800.0 - 0.5);
        assert_eq!(shift, Vec2::new(-mx * 18.0 * 0.3, -my * 18.0 * 0.3));
        assert!(shift.x < 0.0 && shift.y > 0.0);
    }

    #[test]
    fn deeper_planets_shift_more() {
        let vp = Viewport::new(800.0, 800.0);
        let mut shallow = still_planet(Vec2::ZERO, Vec2::ZERO);
        shallow.depth = 0.1;
        let mut deep = shallow.clone();
        deep.depth = 0.35;
        let field = PlanetField::from_planets(vec![shallow, deep]);
        let shifts: Vec<Vec2> = field.parallax(Vec2::new(800.0, 0.0), vp, 18.0).collect();
        assert!(shifts[1].length() > shifts[0].length());
    }
}
