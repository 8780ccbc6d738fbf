// Character selection screen.
//
// A single cursor over `presets + 1` options; the extra last slot asks for
// the customizer. Keyboard navigation wraps, pointer hover moves the cursor,
// clicking the already-selected option confirms it.

use glam::Vec2;

use super::character::Preset;
use super::sprite::draw_avatar;
use crate::engine::{Anchor, DrawList, InputEvent, Key, Rect, Rgb};

const BACKGROUND: Rgb = Rgb::new(20, 20, 40);
const HIGHLIGHT: Rgb = Rgb::new(255, 255, 0);
const DESCRIPTION_TEXT: Rgb = Rgb::new(200, 200, 200);
const HINT_TEXT: Rgb = Rgb::new(180, 180, 180);
const CUSTOM_BODY: Rgb = Rgb::new(128, 128, 128);
const SPRITE_SIZE: f32 = 64.0;

/// What the player picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Preset(usize),
    /// The synthetic last slot: open the customizer.
    CreateCustom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Chosen(Choice),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

// ============================================================================
// CURSOR
// ============================================================================

/// Cursor over the options. Never empty: the custom slot always exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    selected: usize,
    preset_count: usize,
}

impl Selection {
    pub fn new(preset_count: usize) -> Self {
        Self {
            selected: 0,
            preset_count,
        }
    }

    pub fn total_options(&self) -> usize {
        self.preset_count + 1
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn custom_slot(&self) -> usize {
        self.preset_count
    }

    pub fn navigate(&mut self, step: Step) {
        let total = self.total_options();
        self.selected = match step {
            Step::Next => (self.selected + 1) % total,
            Step::Prev => (self.selected + total - 1) % total,
        };
    }

    /// Move the cursor to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.total_options() {
            self.selected = index;
        }
    }

    pub fn confirm(&self) -> Choice {
        if self.selected == self.preset_count {
            Choice::CreateCustom
        } else {
            Choice::Preset(self.selected)
        }
    }
}

// ============================================================================
// SCREEN
// ============================================================================

pub struct SelectionScreen {
    selection: Selection,
    presets: &'static [Preset],
    regions: Vec<Rect>,
    bounds: Vec2,
}

impl SelectionScreen {
    pub fn new(presets: &'static [Preset], bounds: Vec2) -> Self {
        let selection = Selection::new(presets.len());
        let regions = option_regions(selection.total_options(), bounds);
        Self {
            selection,
            presets,
            regions,
            bounds,
        }
    }

    /// Start with the cursor on the "create custom" slot, used when coming
    /// back from a cancelled customizer.
    pub fn on_custom_slot(presets: &'static [Preset], bounds: Vec2) -> Self {
        let mut screen = Self::new(presets, bounds);
        screen.selection.select(screen.selection.custom_slot());
        screen
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn regions(&self) -> &[Rect] {
        &self.regions
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Option<SelectionOutcome> {
        match event {
            // A held key must not keep spinning the cursor or re-confirm.
            InputEvent::KeyDown { repeat: true, .. } => None,
            InputEvent::KeyDown { key, .. } => match key {
                Key::Left | Key::A => {
                    self.selection.navigate(Step::Prev);
                    None
                }
                Key::Right | Key::D => {
                    self.selection.navigate(Step::Next);
                    None
                }
                Key::Enter | Key::Space => Some(SelectionOutcome::Chosen(self.selection.confirm())),
                Key::Escape => Some(SelectionOutcome::Quit),
                _ => None,
            },
            InputEvent::PointerMoved { pos } => {
                self.hover(*pos);
                None
            }
            InputEvent::PointerDown { pos } => self.click(*pos).map(SelectionOutcome::Chosen),
            _ => None,
        }
    }

    pub fn hover(&mut self, point: Vec2) {
        if let Some(index) = self.option_at(point) {
            self.selection.select(index);
        }
    }

    /// First click on an option selects it, a click on the selected option
    /// confirms it.
    pub fn click(&mut self, point: Vec2) -> Option<Choice> {
        let index = self.option_at(point)?;
        if index == self.selection.selected() {
            Some(self.selection.confirm())
        } else {
            self.selection.select(index);
            None
        }
    }

    fn option_at(&self, point: Vec2) -> Option<usize> {
        self.regions.iter().position(|r| r.contains(point))
    }

    pub fn draw(&self) -> DrawList {
        let mut list = DrawList::new(BACKGROUND);
        let (w, h) = (self.bounds.x, self.bounds.y);

        list.text(Vec2::new(w / 2.0, 50.0), "Select Your Character", 36.0, Rgb::WHITE, Anchor::Center);

        for (i, region) in self.regions.iter().enumerate() {
            let center = Vec2::new(region.center().x, h / 2.0);
            let sprite = Rect::from_center_size(center, Vec2::splat(SPRITE_SIZE));

            if i == self.selection.selected() {
                list.stroke(sprite.inflate(10.0), 5.0, HIGHLIGHT);
            }

            let (name, description, body) = match self.presets.get(i) {
                Some(preset) => (preset.name, preset.description, preset.color),
                None => ("Create Custom", "Design your own hero from scratch", CUSTOM_BODY),
            };
            draw_avatar(&mut list, sprite.min, SPRITE_SIZE, body, Rgb::BLACK);
            if self.presets.get(i).is_none() {
                list.text(center + Vec2::new(0.0, 14.0), "+", 28.0, Rgb::WHITE, Anchor::Center);
            }

            list.text(center + Vec2::new(0.0, 60.0), name, 28.0, Rgb::WHITE, Anchor::Center);
            let (line1, line2) = split_description(description);
            list.text(center + Vec2::new(0.0, 90.0), line1, 18.0, DESCRIPTION_TEXT, Anchor::Center);
            if !line2.is_empty() {
                list.text(center + Vec2::new(0.0, 110.0), line2, 18.0, DESCRIPTION_TEXT, Anchor::Center);
            }
        }

        list.text(
            Vec2::new(w / 2.0, h - 50.0),
            "LEFT/RIGHT or mouse to select, ENTER/SPACE or click again to confirm",
            20.0,
            HINT_TEXT,
            Anchor::Center,
        );
        list
    }
}

/// Evenly spaced columns, one hit region per option.
fn option_regions(total: usize, bounds: Vec2) -> Vec<Rect> {
    let column = bounds.x / total as f32;
    (0..total)
        .map(|i| {
            let center = Vec2::new(column * i as f32 + column / 2.0, bounds.y / 2.0 + 40.0);
            Rect::from_center_size(center, Vec2::new(column - 16.0, 180.0))
        })
        .collect()
}

/// First four words on line one, the rest on line two.
fn split_description(description: &str) -> (String, String) {
    let words: Vec<&str> = description.split_whitespace().collect();
    let split = words.len().min(4);
    (words[..split].join(" "), words[split..].join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::character::PRESETS;
    use rstest::rstest;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn screen() -> SelectionScreen {
        SelectionScreen::new(PRESETS, BOUNDS)
    }

    #[test]
    fn prev_from_zero_wraps_to_custom_slot() {
        let mut selection = Selection::new(3);
        assert_eq!(selection.total_options(), 4);
        selection.navigate(Step::Prev);
        assert_eq!(selection.selected(), 3);
        assert_eq!(selection.confirm(), Choice::CreateCustom);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    fn navigation_is_cyclic(#[case] start: usize) {
        let mut selection = Selection::new(3);
        selection.select(start);
        for _ in 0..selection.total_options() {
            selection.navigate(Step::Next);
        }
        assert_eq!(selection.selected(), start);

        selection.navigate(Step::Next);
        selection.navigate(Step::Prev);
        assert_eq!(selection.selected(), start);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut selection = Selection::new(3);
        selection.select(9);
        assert_eq!(selection.selected(), 0);
    }

    #[test]
    fn confirm_returns_preset_index() {
        let mut selection = Selection::new(3);
        selection.select(1);
        assert_eq!(selection.confirm(), Choice::Preset(1));
    }

    #[rstest]
    #[case::enter(Key::Enter)]
    #[case::space(Key::Space)]
    fn accept_keys_confirm(#[case] key: Key) {
        let mut screen = screen();
        screen.handle_event(&InputEvent::key(Key::Right));
        assert_eq!(
            screen.handle_event(&InputEvent::key(key)),
            Some(SelectionOutcome::Chosen(Choice::Preset(1)))
        );
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut screen = screen();
        assert_eq!(screen.handle_event(&InputEvent::typed('q')), None);
        assert_eq!(screen.selection().selected(), 0);
    }

    #[test]
    fn auto_repeat_neither_moves_nor_confirms() {
        let mut screen = screen();
        screen.handle_event(&InputEvent::key(Key::Right));
        assert_eq!(screen.handle_event(&InputEvent::repeated(Key::Right, None)), None);
        assert_eq!(screen.selection().selected(), 1);
        assert_eq!(screen.handle_event(&InputEvent::repeated(Key::Enter, None)), None);
        assert_eq!(screen.handle_event(&InputEvent::repeated(Key::Escape, None)), None);
    }

    #[test]
    fn escape_quits() {
        let mut screen = screen();
        assert_eq!(screen.handle_event(&InputEvent::key(Key::Escape)), Some(SelectionOutcome::Quit));
    }

    #[test]
    fn hover_moves_cursor() {
        let mut screen = screen();
        let target = screen.regions()[2].center();
        screen.handle_event(&InputEvent::PointerMoved { pos: target });
        assert_eq!(screen.selection().selected(), 2);
    }

    #[test]
    fn hover_outside_any_option_keeps_cursor() {
        let mut screen = screen();
        screen.handle_event(&InputEvent::PointerMoved { pos: Vec2::new(400.0, 5.0) });
        assert_eq!(screen.selection().selected(), 0);
    }

    #[test]
    fn click_selects_then_confirms() {
        let mut screen = screen();
        let custom = screen.regions()[3].center();
        assert_eq!(screen.handle_event(&InputEvent::PointerDown { pos: custom }), None);
        assert_eq!(screen.selection().selected(), 3);
        assert_eq!(
            screen.handle_event(&InputEvent::PointerDown { pos: custom }),
            Some(SelectionOutcome::Chosen(Choice::CreateCustom))
        );
    }

    #[test]
    fn regions_do_not_overlap() {
        let screen = screen();
        for pair in screen.regions().windows(2) {
            assert!(pair[0].max().x < pair[1].min.x);
        }
    }

    #[test]
    fn draw_shows_every_option_and_highlight() {
        let mut screen = screen();
        screen.handle_event(&InputEvent::key(Key::Left));
        let list = screen.draw();
        for name in ["Knight", "Mage", "Ranger", "Create Custom"] {
            assert!(list.has_text(name), "missing {name}");
        }
        let yellow = HIGHLIGHT.to_rgba(1.0);
        assert_eq!(list.quads.iter().filter(|q| q.color == yellow).count(), 4);
    }

    #[test]
    fn on_custom_slot_starts_on_last_option() {
        let screen = SelectionScreen::on_custom_slot(PRESETS, BOUNDS);
        assert_eq!(screen.selection().selected(), 3);
    }

    #[test]
    fn description_splits_after_four_words() {
        let (a, b) = split_description("A brave warrior with strong defense");
        assert_eq!(a, "A brave warrior with");
        assert_eq!(b, "strong defense");
        let (a, b) = split_description("Short");
        assert_eq!((a.as_str(), b.as_str()), ("Short", ""));
    }
}
