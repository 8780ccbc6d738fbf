// Game module - the three screens and the driver that switches between them

pub mod app;
pub mod character;
pub mod customizer;
pub mod gameplay;
pub mod selection;
pub mod sprite;
pub mod steering;

pub use app::{App, AppFlow, Screen};
pub use character::Character;
