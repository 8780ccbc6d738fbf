// Hero Forge: pick or build a hero, then steer it around a bounded meadow.
// The library holds every screen and the renderer; the binary only wires
// them to a winit event loop.

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod logging;

pub use config::{Args, GameConfig};
pub use error::GfxError;
pub use logging::init as init_logging;
