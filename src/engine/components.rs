// Core ECS components for the gameplay world
// The player avatar is one entity carrying all of these.

use bevy_ecs::prelude::*;
use glam::Vec2;

/// 8-bit RGB triple. Channels are `u8`, so [0, 255] holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            alpha.clamp(0.0, 1.0),
        ]
    }
}

/// Top-left corner of an entity in playfield pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
}

impl Transform {
    pub fn from_position(position: Vec2) -> Self {
        Self { position }
    }
}

/// Square side length, used for both drawing and boundary clamping.
#[derive(Component, Debug, Clone, Copy)]
pub struct Footprint {
    pub extent: f32,
}

/// Maximum displacement per tick, in pixels.
#[derive(Component, Debug, Clone, Copy)]
pub struct Mover {
    pub speed: f32,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Appearance {
    pub body: Rgb,
    pub eyes: Rgb,
}

#[derive(Component, Debug, Clone)]
pub struct Identity {
    pub name: String,
    pub description: String,
}

/// Marks the player-controlled avatar.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

// ============================================================================
// RESOURCES
// ============================================================================

/// Playfield size; entities stay inside `[0, size - extent]` on each axis.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayfieldBounds {
    pub size: Vec2,
}

/// Directional keys held this tick, refreshed by the gameplay screen before
/// the schedule runs.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Pending click-to-move target plus the countdown for its on-screen marker.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveTarget {
    pub point: Option<Vec2>,
    pub marker_frames: u32,
}

impl MoveTarget {
    pub fn set(&mut self, point: Vec2, marker_frames: u32) {
        self.point = Some(point);
        self.marker_frames = marker_frames;
    }

    pub fn marker_visible(&self) -> bool {
        self.point.is_some() && self.marker_frames > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_rgba_normalizes() {
        let rgba = Rgb::new(255, 0, 51).to_rgba(0.5);
        assert_eq!(rgba, [1.0, 0.0, 0.2, 0.5]);
    }

    #[test]
    fn channels_round_trip() {
        let color = Rgb::new(1, 2, 3);
        assert_eq!(Rgb::from_channels(color.channels()), color);
    }

    #[test]
    fn marker_hidden_without_target() {
        let target = MoveTarget {
            point: None,
            marker_frames: 10,
        };
        assert!(!target.marker_visible());
    }
}
