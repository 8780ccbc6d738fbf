// Screen-space rectangles in logical pixels.
// Origin is the top-left corner of the window, +Y points down.

use glam::Vec2;

/// Axis-aligned rectangle used for hit testing and layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self { min: center - size * 0.5, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Inclusive on all four edges, matching how a pixel on the border still
    /// counts as a hit.
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }

    /// Grow by `amount` on every side (negative shrinks).
    pub fn inflate(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(amount),
            size: (self.size + Vec2::splat(amount * 2.0)).max(Vec2::ZERO),
        }
    }
}
