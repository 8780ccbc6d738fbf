// Engine module - reusable pieces the game screens are built on
// Input translation, ECS components/systems, 2D geometry, draw lists and
// the wgpu/egui presentation layer.

pub mod components;
pub mod draw_list;
pub mod geometry;
pub mod input;
pub mod overlay;
pub mod pacing;
pub mod renderer;
pub mod systems;

// Re-export commonly used items
pub use components::*;
pub use draw_list::{Anchor, DrawList, Label, Quad};
pub use geometry::Rect;
pub use input::{InputEvent, InputState, Key, WinitTranslator};
pub use pacing::FramePacer;
pub use renderer::Renderer;
pub use systems::{gameplay_schedule, marker_system, steering_system};
