// Input state tracking for keyboard and mouse
// Abstracts winit events into plain InputEvents the screens can consume,
// plus a queryable held-key snapshot for per-frame movement.

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Logical keys the game reacts to. Anything else arrives as `Other`, which
/// still carries its typed text so the name field can use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    E,
    Digit(u8),
    Enter,
    Space,
    Tab,
    Backspace,
    Escape,
    Other,
}

/// One discrete input signal, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// `text` is the printable character the press produced, if any.
    /// `repeat` marks OS auto-repeat while the key stays held.
    KeyDown { key: Key, text: Option<char>, repeat: bool },
    KeyUp { key: Key },
    PointerDown { pos: Vec2 },
    PointerUp { pos: Vec2 },
    PointerMoved { pos: Vec2 },
    /// The window lost keyboard focus; every held key is released.
    FocusLost,
}

impl InputEvent {
    /// Key press without text, the common case for control keys.
    pub const fn key(key: Key) -> Self {
        Self::KeyDown { key, text: None, repeat: false }
    }

    /// Key press that typed `c`.
    pub const fn typed(c: char) -> Self {
        Self::KeyDown { key: Key::Other, text: Some(c), repeat: false }
    }

    /// The auto-repeat of a held key.
    pub const fn repeated(key: Key, text: Option<char>) -> Self {
        Self::KeyDown { key, text, repeat: true }
    }

    /// True for presses that came from auto-repeat rather than the player.
    pub fn is_repeat(&self) -> bool {
        matches!(self, Self::KeyDown { repeat: true, .. })
    }
}

// ============================================================================
// HELD STATE
// ============================================================================

#[derive(Debug, Default)]
pub struct InputState {
    keys_held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event into the held-key snapshot.
    /// Call this once per event before the active screen handles it.
    pub fn record(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key, .. } => {
                self.keys_held.insert(*key);
            }
            InputEvent::KeyUp { key } => {
                self.keys_held.remove(key);
            }
            InputEvent::FocusLost => self.keys_held.clear(),
            InputEvent::PointerDown { .. }
            | InputEvent::PointerUp { .. }
            | InputEvent::PointerMoved { .. } => {}
        }
    }

    pub fn is_key_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    pub fn release_all(&mut self) {
        self.keys_held.clear();
    }
}

// ============================================================================
// WINIT TRANSLATION
// ============================================================================

/// Turns winit window events into `InputEvent`s.
///
/// Cursor positions arrive in physical pixels and are converted to logical
/// pixels; mouse button events carry no position, so the last cursor
/// position is reused.
pub struct WinitTranslator {
    pointer: Vec2,
    scale_factor: f64,
}

impl WinitTranslator {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            pointer: Vec2::ZERO,
            scale_factor,
        }
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => Some(translate_key(event)),
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.scale_factor);
                self.pointer = Vec2::new(logical.x, logical.y);
                Some(InputEvent::PointerMoved { pos: self.pointer })
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(match state {
                ElementState::Pressed => InputEvent::PointerDown { pos: self.pointer },
                ElementState::Released => InputEvent::PointerUp { pos: self.pointer },
            }),
            WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                None
            }
            _ => None,
        }
    }
}

fn translate_key(event: &KeyEvent) -> InputEvent {
    let key = match event.physical_key {
        PhysicalKey::Code(code) => map_key_code(code),
        PhysicalKey::Unidentified(_) => Key::Other,
    };
    match event.state {
        ElementState::Pressed => {
            let text = event
                .text
                .as_ref()
                .and_then(|t| t.chars().next())
                .filter(|c| !c.is_control());
            InputEvent::KeyDown {
                key,
                text,
                repeat: event.repeat,
            }
        }
        ElementState::Released => InputEvent::KeyUp { key },
    }
}

fn map_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::Digit1 => Key::Digit(1),
        KeyCode::Digit2 => Key::Digit(2),
        KeyCode::Digit3 => Key::Digit(3),
        KeyCode::Digit4 => Key::Digit(4),
        KeyCode::Digit5 => Key::Digit(5),
        KeyCode::Digit6 => Key::Digit(6),
        KeyCode::Digit7 => Key::Digit(7),
        KeyCode::Digit8 => Key::Digit(8),
        KeyCode::Digit9 => Key::Digit(9),
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Space => Key::Space,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}
