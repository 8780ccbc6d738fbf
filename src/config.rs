// Command-line options and the immutable settings derived from them.

use clap::Parser;
use glam::Vec2;

use crate::game::customizer::NamePolicy;

/// Smallest playfield the customizer's fixed layout fits in.
pub const MIN_WIDTH: u32 = 720;
pub const MIN_HEIGHT: u32 = 580;

/// Pick a hero, customise one, then walk it around a meadow.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Playfield width in logical pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range((MIN_WIDTH as i64)..=8192))]
    pub width: u32,

    /// Playfield height in logical pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range((MIN_HEIGHT as i64)..=8192))]
    pub height: u32,

    /// Target frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=480))]
    pub fps: u32,

    /// What the customizer does with an empty name
    #[arg(long, value_enum, default_value_t = NamePolicy::RejectBlank)]
    pub name_policy: NamePolicy,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub name_policy: NamePolicy,
}

impl GameConfig {
    /// Playfield size, also the steering clamp bounds.
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fps: 60,
            name_policy: NamePolicy::default(),
        }
    }
}

impl From<&Args> for GameConfig {
    fn from(args: &Args) -> Self {
        Self {
            width: args.width,
            height: args.height,
            fps: args.fps,
            name_policy: args.name_policy,
        }
    }
}
