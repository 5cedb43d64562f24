//! Pointer projections for hover glows on links, buttons and cards.
//!
//! Stateless: each pointer event maps to a pair of CSS custom property values.

use glam::Vec2;

/// Custom properties written on hovered links and buttons.
pub const HOVER_X: &str = "--x";
pub const HOVER_Y: &str = "--y";
/// Custom properties written on cards.
pub const CARD_SWEEP: &str = "--mx";
pub const CARD_ANGLE: &str = "--ang";

/// Element bounding box in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

/// Pointer position relative to an element's top-left corner. Unbounded.
pub fn local_pointer(pointer: Vec2, rect: &ElementRect) -> Vec2 {
    pointer - rect.origin()
}

/// `--x` / `--y` values for a hovered element.
pub fn hover_properties(pointer: Vec2, rect: &ElementRect) -> [(&'static str, String); 2] {
    let local = local_pointer(pointer, rect);
    [(HOVER_X, format!("{}px", local.x)), (HOVER_Y, format!("{}px", local.y))]
}

/// Horizontal sweep of the pointer across a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSweep {
    /// In [0, 1].
    pub fraction: f32,
}

impl CardSweep {
    pub fn percent(&self) -> f32 {
        self.fraction * 100.0
    }

    pub fn angle_deg(&self) -> f32 {
        self.fraction * 360.0
    }

    /// `--mx` / `--ang` values.
    pub fn properties(&self) -> [(&'static str, String); 2] {
        [
            (CARD_SWEEP, format!("{}%", self.percent())),
            (CARD_ANGLE, format!("{}deg", self.angle_deg())),
        ]
    }
}

/// Fraction of the card's width the pointer is across, clamped to [0, 1].
/// A card with no width reports 0.
pub fn card_sweep(pointer_x: f32, rect: &ElementRect) -> CardSweep {
    if rect.width.is_nan() || rect.width <= 0.0 {
        return CardSweep { fraction: 0.0 };
    }
    let fraction = ((pointer_x - rect.left) / rect.width).clamp(0.0, 1.0);
    CardSweep { fraction }
}
