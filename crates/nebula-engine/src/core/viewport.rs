use glam::Vec2;

/// Visible page area in CSS pixels. Shared read-only by every system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }

    pub fn longest_side(&self) -> f32 {
        self.width.max(self.height)
    }

    /// Point at fractional coordinates, e.g. `(0.5, 0.5)` is the center.
    pub fn at(&self, fx: f32, fy: f32) -> Vec2 {
        Vec2::new(self.width * fx, self.height * fy)
    }

    /// Pointer offset from the center, normalized to roughly [-0.5, 0.5] per axis.
    /// Empty axes report 0 instead of dividing by zero.
    pub fn centered_offset(&self, pointer: Vec2) -> Vec2 {
        let axis = |p: f32, extent: f32| if extent > 0.0 { p / extent - 0.5 } else { 0.0 };
        Vec2::new(axis(pointer.x, self.width), axis(pointer.y, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        let vp = Viewport::new(-5.0, 10.0);
        assert_eq!(vp.width, 0.0);
        assert_eq!(vp.area(), 0.0);
    }

    #[test]
    fn centered_offset_spans_half_units() {
        let vp = Viewport::new(1000.0, 500.0);
        assert_eq!(vp.centered_offset(Vec2::new(500.0, 250.0)), Vec2::ZERO);
        assert_eq!(vp.centered_offset(Vec2::ZERO), Vec2::new(-0.5, -0.5));
        assert_eq!(vp.centered_offset(Vec2::new(1000.0, 500.0)), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn centered_offset_on_empty_viewport_is_zero() {
        let vp = Viewport::default();
        assert_eq!(vp.centered_offset(Vec2::new(30.0, 40.0)), Vec2::ZERO);
    }
}
