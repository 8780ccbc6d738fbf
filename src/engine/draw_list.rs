// Per-frame draw commands produced by a screen.
// Screens never touch the GPU: they fill a DrawList, the renderer consumes it.
// Quads are drawn first in submission order, labels on top of all quads.

use glam::Vec2;

use super::components::Rgb;
use super::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub rect: Rect,
    /// Straight (non-premultiplied) RGBA in [0, 1].
    pub color: [f32; 4],
}

/// Where a label's `pos` sits relative to the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    LeftTop,
    CenterTop,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub pos: Vec2,
    pub text: String,
    pub size: f32,
    pub color: Rgb,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub clear: Rgb,
    pub quads: Vec<Quad>,
    pub labels: Vec<Label>,
}

impl DrawList {
    pub fn new(clear: Rgb) -> Self {
        Self {
            clear,
            quads: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn fill(&mut self, rect: Rect, color: Rgb) {
        self.fill_alpha(rect, color, 1.0);
    }

    pub fn fill_alpha(&mut self, rect: Rect, color: Rgb, alpha: f32) {
        self.quads.push(Quad {
            rect,
            color: color.to_rgba(alpha),
        });
    }

    /// Outline drawn inside `rect` as four quads of the given thickness.
    pub fn stroke(&mut self, rect: Rect, thickness: f32, color: Rgb) {
        let t = thickness.min(rect.size.x * 0.5).min(rect.size.y * 0.5);
        let (x, y) = (rect.min.x, rect.min.y);
        let (w, h) = (rect.size.x, rect.size.y);
        self.fill(Rect::new(x, y, w, t), color);
        self.fill(Rect::new(x, y + h - t, w, t), color);
        self.fill(Rect::new(x, y + t, t, h - 2.0 * t), color);
        self.fill(Rect::new(x + w - t, y + t, t, h - 2.0 * t), color);
    }

    pub fn text(&mut self, pos: Vec2, text: impl Into<String>, size: f32, color: Rgb, anchor: Anchor) {
        self.labels.push(Label {
            pos,
            text: text.into(),
            size,
            color,
            anchor,
        });
    }

    /// True if any label's text contains `needle`. Handy in tests.
    pub fn has_text(&self, needle: &str) -> bool {
        self.labels.iter().any(|l| l.text.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_emits_four_edges_inside_rect() {
        let mut list = DrawList::new(Rgb::BLACK);
        let rect = Rect::new(10.0, 10.0, 100.0, 40.0);
        list.stroke(rect, 2.0, Rgb::WHITE);
        assert_eq!(list.quads.len(), 4);
        for quad in &list.quads {
            assert!(quad.rect.min.x >= rect.min.x && quad.rect.max().x <= rect.max().x);
            assert!(quad.rect.min.y >= rect.min.y && quad.rect.max().y <= rect.max().y);
        }
    }

    #[test]
    fn labels_keep_submission_order() {
        let mut list = DrawList::new(Rgb::BLACK);
        list.text(Vec2::ZERO, "first", 24.0, Rgb::WHITE, Anchor::LeftTop);
        list.text(Vec2::ZERO, "second", 24.0, Rgb::WHITE, Anchor::Center);
        assert_eq!(list.labels[0].text, "first");
        assert_eq!(list.labels[1].anchor, Anchor::Center);
        assert!(list.has_text("sec"));
    }
}
