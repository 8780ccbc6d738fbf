// Character customizer screen.
//
// Two mutually exclusive input modes:
//   NameEntry      typed characters go into the name field
//   AttributeEdit  arrows/digits/E edit body colour, slider and eye colour
// TAB flips the mode, clicking the name field enters NameEntry and clicking
// anywhere else leaves it. Enter confirms and Escape cancels in either mode.
// Pointer drags on a slider track set that colour channel proportionally.

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;

use super::character::{CUSTOM_DESCRIPTION, Character, CustomizerTables};
use super::selection::Step;
use super::sprite::draw_avatar;
use crate::engine::{Anchor, DrawList, InputEvent, Key, Rect, Rgb};

pub const NAME_MAX_CHARS: usize = 20;
pub const COLOR_STEP: i16 = 5;
pub const CHANNEL_COUNT: usize = 3;
pub const FALLBACK_NAME: &str = "Custom Hero";

const CHANNEL_NAMES: [&str; CHANNEL_COUNT] = ["Red", "Green", "Blue"];

/// What to do when the player confirms with a blank name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum NamePolicy {
    /// Start empty; confirming a blank name does nothing.
    #[default]
    RejectBlank,
    /// Start with a random generated name; a blank name falls back to
    /// "Custom Hero".
    AutoGenerate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    NameEntry,
    AttributeEdit,
}

/// Text focus notification for platform adapters (e.g. an on-screen keyboard).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFocus {
    Gained,
    Lost,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CustomizerOutcome {
    Created(Character),
    Cancelled,
}

// ============================================================================
// STATE MACHINE
// ============================================================================

#[derive(Debug, Clone)]
pub struct CustomizerState {
    name: String,
    body: [u8; CHANNEL_COUNT],
    eye_index: usize,
    mode: Mode,
    active_slider: usize,
    dragging: Option<usize>,
    pending_focus: Option<TextFocus>,
    tables: CustomizerTables,
    policy: NamePolicy,
}

impl CustomizerState {
    pub fn new<R: Rng + ?Sized>(tables: CustomizerTables, policy: NamePolicy, rng: &mut R) -> Self {
        let name = match policy {
            NamePolicy::RejectBlank => String::new(),
            NamePolicy::AutoGenerate => generate_name(&tables, rng),
        };
        Self {
            name,
            body: tables.starting_color().channels(),
            eye_index: 0,
            mode: Mode::NameEntry,
            active_slider: 0,
            dragging: None,
            pending_focus: Some(TextFocus::Gained),
            tables,
            policy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body_color(&self) -> Rgb {
        Rgb::from_channels(self.body)
    }

    pub fn eye_index(&self) -> usize {
        self.eye_index
    }

    pub fn eye_color(&self) -> Rgb {
        self.tables
            .eye_colors
            .get(self.eye_index)
            .map_or(Rgb::BLACK, |e| e.color)
    }

    pub fn eye_color_name(&self) -> &'static str {
        self.tables.eye_colors.get(self.eye_index).map_or("", |e| e.name)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active_slider(&self) -> usize {
        self.active_slider
    }

    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    pub fn tables(&self) -> &CustomizerTables {
        &self.tables
    }

    /// Drain the last focus change, if any, for the platform adapter.
    pub fn take_focus_change(&mut self) -> Option<TextFocus> {
        self.pending_focus.take()
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.pending_focus = Some(match mode {
            Mode::NameEntry => TextFocus::Gained,
            Mode::AttributeEdit => TextFocus::Lost,
        });
        log::debug!("customizer mode -> {mode:?}");
    }

    pub fn toggle_mode(&mut self) {
        match self.mode {
            Mode::NameEntry => self.set_mode(Mode::AttributeEdit),
            Mode::AttributeEdit => self.set_mode(Mode::NameEntry),
        }
    }

    pub fn focus_name(&mut self) {
        self.set_mode(Mode::NameEntry);
    }

    /// Leave NameEntry; a no-op in AttributeEdit.
    pub fn blur_name(&mut self) {
        if self.mode == Mode::NameEntry {
            self.set_mode(Mode::AttributeEdit);
        }
    }

    /// Append a printable character while under the length cap.
    pub fn push_char(&mut self, c: char) {
        if !c.is_control() && self.name.chars().count() < NAME_MAX_CHARS {
            self.name.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.name.pop();
    }

    pub fn cycle_slider(&mut self, step: Step) {
        self.active_slider = match step {
            Step::Next => (self.active_slider + 1) % CHANNEL_COUNT,
            Step::Prev => (self.active_slider + CHANNEL_COUNT - 1) % CHANNEL_COUNT,
        };
    }

    /// Nudge the active channel by `delta`, clamped to [0, 255].
    pub fn adjust_active(&mut self, delta: i16) {
        let channel = &mut self.body[self.active_slider];
        *channel = (i16::from(*channel) + delta).clamp(0, 255) as u8;
    }

    /// Replace the body colour with preset `index`; unknown indices are ignored.
    pub fn apply_preset(&mut self, index: usize) {
        if let Some(preset) = self.tables.color_presets.get(index) {
            self.body = preset.color.channels();
        }
    }

    pub fn cycle_eye_color(&mut self) {
        let count = self.tables.eye_colors.len().max(1);
        self.eye_index = (self.eye_index + 1) % count;
    }

    /// Pointer pressed on slider `channel`'s track at `relative_x` pixels from
    /// its left edge.
    pub fn begin_drag(&mut self, channel: usize, relative_x: f32, track_width: f32) {
        if channel >= CHANNEL_COUNT {
            return;
        }
        self.dragging = Some(channel);
        self.active_slider = channel;
        self.set_channel_from_track(channel, relative_x, track_width);
    }

    /// Pointer moved while pressed. No effect unless a drag is in progress.
    pub fn drag_to(&mut self, relative_x: f32, track_width: f32) {
        if let Some(channel) = self.dragging {
            self.active_slider = channel;
            self.set_channel_from_track(channel, relative_x, track_width);
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    fn set_channel_from_track(&mut self, channel: usize, relative_x: f32, track_width: f32) {
        if track_width <= 0.0 {
            return;
        }
        let fraction = relative_x.clamp(0.0, track_width) / track_width;
        self.body[channel] = (fraction * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Build the character, or `None` when the name is blank under
    /// `NamePolicy::RejectBlank`.
    pub fn confirm(&self) -> Option<Character> {
        let trimmed = self.name.trim();
        let name = if !trimmed.is_empty() {
            trimmed.to_owned()
        } else {
            match self.policy {
                NamePolicy::RejectBlank => return None,
                NamePolicy::AutoGenerate => FALLBACK_NAME.to_owned(),
            }
        };
        Some(Character::new(
            name,
            CUSTOM_DESCRIPTION,
            self.body_color(),
            self.eye_color(),
        ))
    }
}

/// Random prefix + suffix, e.g. "Stormrider".
pub fn generate_name<R: Rng + ?Sized>(tables: &CustomizerTables, rng: &mut R) -> String {
    match (tables.name_prefixes.choose(rng), tables.name_suffixes.choose(rng)) {
        (Some(prefix), Some(suffix)) => format!("{prefix}{suffix}"),
        _ => FALLBACK_NAME.to_owned(),
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Hit regions for the pointer-driven controls.
#[derive(Debug, Clone)]
pub struct CustomizerLayout {
    pub back_button: Rect,
    pub create_button: Rect,
    pub name_field: Rect,
    pub preview: Rect,
    pub preset_buttons: Vec<Rect>,
    pub slider_tracks: [Rect; CHANNEL_COUNT],
    pub eye_swatch: Rect,
}

impl CustomizerLayout {
    pub fn new(bounds: Vec2, preset_count: usize) -> Self {
        let column = 400.0;
        Self {
            back_button: Rect::new(bounds.x - 110.0, 10.0, 100.0, 40.0),
            create_button: Rect::new(50.0, 340.0, 160.0, 44.0),
            name_field: Rect::new(50.0, 250.0, 300.0, 36.0),
            preview: Rect::new(50.0, 80.0, 128.0, 128.0),
            preset_buttons: (0..preset_count)
                .map(|i| Rect::new(column, 110.0 + i as f32 * 35.0, 150.0, 30.0))
                .collect(),
            slider_tracks: [0, 1, 2].map(|i| Rect::new(column + 70.0, 295.0 + i as f32 * 40.0, 200.0, 20.0)),
            eye_swatch: Rect::new(column, 440.0, 40.0, 40.0),
        }
    }
}

// ============================================================================
// SCREEN
// ============================================================================

const BACKGROUND: Rgb = Rgb::new(20, 20, 40);
const PANEL: Rgb = Rgb::new(60, 60, 80);
const ACTIVE_TEXT: Rgb = Rgb::new(255, 255, 100);
const IDLE_TEXT: Rgb = Rgb::new(200, 200, 200);
const HINT_TEXT: Rgb = Rgb::new(180, 180, 180);

pub struct CustomizerScreen {
    state: CustomizerState,
    layout: CustomizerLayout,
    bounds: Vec2,
    back_hovered: bool,
}

impl CustomizerScreen {
    pub fn new(state: CustomizerState, bounds: Vec2) -> Self {
        let layout = CustomizerLayout::new(bounds, state.tables.color_presets.len());
        Self {
            state,
            layout,
            bounds,
            back_hovered: false,
        }
    }

    pub fn state(&self) -> &CustomizerState {
        &self.state
    }

    pub fn layout(&self) -> &CustomizerLayout {
        &self.layout
    }

    pub fn take_focus_change(&mut self) -> Option<TextFocus> {
        self.state.take_focus_change()
    }

    /// `None` while customisation is still in progress.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<CustomizerOutcome> {
        match event {
            InputEvent::KeyDown { key, text, repeat } => {
                if *repeat && !self.accepts_repeat(*key, *text) {
                    return None;
                }
                self.handle_key(*key, *text)
            }
            InputEvent::PointerMoved { pos } => {
                self.back_hovered = self.layout.back_button.contains(*pos);
                if let Some(channel) = self.state.dragging() {
                    let track = self.layout.slider_tracks[channel];
                    self.state.drag_to(pos.x - track.min.x, track.width());
                }
                None
            }
            InputEvent::PointerDown { pos } => self.handle_click(*pos),
            InputEvent::PointerUp { .. } => {
                self.state.end_drag();
                None
            }
            InputEvent::FocusLost => {
                // The button may be released outside the window.
                self.state.end_drag();
                None
            }
            InputEvent::KeyUp { .. } => None,
        }
    }

    /// Held keys only repeat into the name field: text and Backspace.
    fn accepts_repeat(&self, key: Key, text: Option<char>) -> bool {
        self.state.mode() == Mode::NameEntry && (key == Key::Backspace || text.is_some())
    }

    fn handle_key(&mut self, key: Key, text: Option<char>) -> Option<CustomizerOutcome> {
        match key {
            Key::Escape => return self.cancel(),
            Key::Enter => return self.confirm(),
            Key::Tab => {
                self.state.toggle_mode();
                return None;
            }
            _ => {}
        }

        match self.state.mode() {
            Mode::NameEntry => match key {
                Key::Backspace => self.state.backspace(),
                Key::Space => self.state.push_char(' '),
                _ => {
                    if let Some(c) = text {
                        self.state.push_char(c);
                    }
                }
            },
            Mode::AttributeEdit => match key {
                Key::Space => return self.confirm(),
                Key::Up => self.state.cycle_slider(Step::Prev),
                Key::Down => self.state.cycle_slider(Step::Next),
                Key::Left => self.state.adjust_active(-COLOR_STEP),
                Key::Right => self.state.adjust_active(COLOR_STEP),
                Key::Digit(n) if n >= 1 => self.state.apply_preset(usize::from(n - 1)),
                Key::E => self.state.cycle_eye_color(),
                _ => {}
            },
        }
        None
    }

    fn handle_click(&mut self, pos: Vec2) -> Option<CustomizerOutcome> {
        if self.layout.back_button.contains(pos) {
            return self.cancel();
        }
        if self.layout.name_field.contains(pos) {
            self.state.focus_name();
            return None;
        }
        self.state.blur_name();

        if let Some(channel) = self.layout.slider_tracks.iter().position(|t| t.contains(pos)) {
            let track = self.layout.slider_tracks[channel];
            self.state.begin_drag(channel, pos.x - track.min.x, track.width());
        } else if let Some(index) = self.layout.preset_buttons.iter().position(|b| b.contains(pos)) {
            self.state.apply_preset(index);
        } else if self.layout.eye_swatch.contains(pos) {
            self.state.cycle_eye_color();
        } else if self.layout.create_button.contains(pos) {
            return self.confirm();
        }
        None
    }

    fn cancel(&self) -> Option<CustomizerOutcome> {
        log::info!("character creation cancelled");
        Some(CustomizerOutcome::Cancelled)
    }

    fn confirm(&self) -> Option<CustomizerOutcome> {
        match self.state.confirm() {
            Some(character) => {
                log::info!("created character {:?}", character.name);
                Some(CustomizerOutcome::Created(character))
            }
            None => {
                log::debug!("confirm rejected: name is blank");
                None
            }
        }
    }

    pub fn draw(&self) -> DrawList {
        let mut list = DrawList::new(BACKGROUND);
        let state = &self.state;
        let layout = &self.layout;
        let w = self.bounds.x;

        // Back button
        let back_fill = if self.back_hovered { Rgb::new(100, 100, 200) } else { Rgb::new(70, 70, 150) };
        list.fill(layout.back_button, back_fill);
        list.stroke(layout.back_button, 2.0, Rgb::new(200, 200, 255));
        list.text(layout.back_button.center(), "Back", 20.0, Rgb::WHITE, Anchor::Center);

        list.text(Vec2::new(w / 2.0, 20.0), "Character Creator", 36.0, Rgb::WHITE, Anchor::CenterTop);

        // Preview: body fills 80% of the frame.
        list.fill(layout.preview, Rgb::new(40, 40, 60));
        list.stroke(layout.preview.inflate(2.0), 2.0, Rgb::WHITE);
        let body = layout.preview.size.x * 0.8;
        let inset = (layout.preview.size.x - body) / 2.0;
        draw_avatar(&mut list, layout.preview.min + Vec2::splat(inset), body, state.body_color(), state.eye_color());

        // Name field
        let typing = state.mode() == Mode::NameEntry;
        list.text(layout.name_field.min - Vec2::new(0.0, 24.0), "Name:", 20.0, Rgb::WHITE, Anchor::LeftTop);
        list.fill(layout.name_field, Rgb::new(40, 40, 70));
        list.stroke(layout.name_field, 2.0, if typing { ACTIVE_TEXT } else { Rgb::new(150, 150, 150) });
        let shown = if typing { format!("{}_", state.name()) } else { state.name().to_owned() };
        list.text(layout.name_field.min + Vec2::new(8.0, 8.0), shown, 20.0, Rgb::WHITE, Anchor::LeftTop);
        let mode_hint = if typing {
            "Typing name (TAB to edit colors)"
        } else {
            "Editing colors (TAB to type name)"
        };
        list.text(layout.name_field.min + Vec2::new(0.0, 46.0), mode_hint, 16.0, HINT_TEXT, Anchor::LeftTop);

        list.fill(layout.create_button, Rgb::new(60, 140, 80));
        list.stroke(layout.create_button, 2.0, Rgb::WHITE);
        list.text(layout.create_button.center(), "Create", 22.0, Rgb::WHITE, Anchor::Center);

        // Presets
        let column = layout.eye_swatch.min.x;
        let preset_count = state.tables().color_presets.len();
        list.text(Vec2::new(column, 80.0), format!("Presets (1-{preset_count}):"), 20.0, Rgb::WHITE, Anchor::LeftTop);
        for (i, (preset, button)) in state.tables().color_presets.iter().zip(&layout.preset_buttons).enumerate() {
            let matches = preset.color == state.body_color();
            list.fill(*button, if matches { Rgb::new(100, 150, 255) } else { PANEL });
            list.stroke(*button, 2.0, Rgb::WHITE);
            list.fill(Rect::new(button.min.x + 5.0, button.min.y + 5.0, 20.0, 20.0), preset.color);
            list.text(
                button.min + Vec2::new(30.0, 6.0),
                format!("{}. {}", i + 1, preset.name),
                18.0,
                Rgb::WHITE,
                Anchor::LeftTop,
            );
        }

        // RGB sliders
        list.text(
            Vec2::new(column, 262.0),
            "Body Color (click/drag or arrow keys):",
            18.0,
            Rgb::WHITE,
            Anchor::LeftTop,
        );
        let channels = state.body_color().channels();
        for (i, track) in layout.slider_tracks.iter().enumerate() {
            let active = !typing && i == state.active_slider();
            let label_color = if active { ACTIVE_TEXT } else { IDLE_TEXT };
            list.text(Vec2::new(column, track.min.y), format!("{}:", CHANNEL_NAMES[i]), 18.0, label_color, Anchor::LeftTop);

            list.fill(*track, PANEL);
            let mut pure = [0u8; CHANNEL_COUNT];
            pure[i] = 255;
            let fill_width = f32::from(channels[i]) / 255.0 * track.width();
            list.fill(Rect::new(track.min.x, track.min.y, fill_width, track.size.y), Rgb::from_channels(pure));
            list.stroke(*track, 2.0, Rgb::WHITE);

            list.text(
                Vec2::new(track.max().x + 10.0, track.min.y),
                channels[i].to_string(),
                18.0,
                Rgb::WHITE,
                Anchor::LeftTop,
            );
        }

        // Eye colour
        list.text(Vec2::new(column, 412.0), "Eye Color (E or click to cycle):", 18.0, Rgb::WHITE, Anchor::LeftTop);
        list.fill(layout.eye_swatch, state.eye_color());
        list.stroke(layout.eye_swatch, 2.0, Rgb::WHITE);
        list.text(
            Vec2::new(layout.eye_swatch.max().x + 10.0, layout.eye_swatch.min.y + 10.0),
            state.eye_color_name(),
            20.0,
            Rgb::WHITE,
            Anchor::LeftTop,
        );

        let instructions = [
            "TAB: switch name/colors | arrows: sliders | 1-4: presets | E: eye color",
            "ENTER or Create: create character",
            "ESC or Back: cancel",
        ];
        let top = self.bounds.y - 80.0;
        for (i, line) in instructions.iter().enumerate() {
            list.text(Vec2::new(50.0, top + i as f32 * 25.0), *line, 16.0, HINT_TEXT, Anchor::LeftTop);
        }
        list
    }
}
