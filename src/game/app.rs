// Top-level screen driver.
//
//   Selection --preset--> Gameplay
//   Selection --custom--> Customizer --created--> Gameplay
//                         Customizer --cancel---> Selection
//   Selection/Gameplay --escape--> exit
//
// The host feeds events one at a time, calls tick() once per frame and
// renders whatever draw() returns.

use glam::Vec2;
use rand::rngs::ThreadRng;

use super::character::{CustomizerTables, PRESETS, Preset, preset_character};
use super::customizer::{CustomizerOutcome, CustomizerScreen, CustomizerState, Mode, NamePolicy, TextFocus};
use super::gameplay::{GameplayOutcome, GameplayScreen};
use super::selection::{Choice, SelectionOutcome, SelectionScreen};
use crate::config::GameConfig;
use crate::engine::{DrawList, InputEvent, InputState};

pub enum Screen {
    Selection(SelectionScreen),
    Customizer(CustomizerScreen),
    Gameplay(GameplayScreen),
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Selection(_) => "selection",
            Screen::Customizer(_) => "customizer",
            Screen::Gameplay(_) => "gameplay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppFlow {
    Continue,
    Exit,
}

/// What a screen's event handler asked the driver to do.
enum Transition {
    To(Screen),
    Exit,
}

pub struct App {
    screen: Screen,
    input: InputState,
    bounds: Vec2,
    presets: &'static [Preset],
    tables: CustomizerTables,
    name_policy: NamePolicy,
    rng: ThreadRng,
    /// Focus change produced by leaving a screen, reported before any from
    /// the screen that replaced it.
    pending_focus: Option<TextFocus>,
}

impl App {
    pub fn new(config: &GameConfig) -> Self {
        let bounds = config.bounds();
        Self {
            screen: Screen::Selection(SelectionScreen::new(PRESETS, bounds)),
            input: InputState::new(),
            bounds,
            presets: PRESETS,
            tables: CustomizerTables::default(),
            name_policy: config.name_policy,
            rng: rand::thread_rng(),
            pending_focus: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Route one event to the active screen and apply any transition it asks
    /// for. The effect is fully applied before this returns.
    pub fn handle_event(&mut self, event: &InputEvent) -> AppFlow {
        self.input.record(event);

        let transition = match &mut self.screen {
            Screen::Selection(selection) => match selection.handle_event(event) {
                Some(SelectionOutcome::Chosen(choice)) => Some(self.after_selection(choice)),
                Some(SelectionOutcome::Quit) => Some(Transition::Exit),
                None => None,
            },
            Screen::Customizer(customizer) => match customizer.handle_event(event) {
                Some(CustomizerOutcome::Created(character)) => {
                    Some(Transition::To(Screen::Gameplay(GameplayScreen::new(character, self.bounds))))
                }
                Some(CustomizerOutcome::Cancelled) => Some(Transition::To(Screen::Selection(
                    SelectionScreen::on_custom_slot(self.presets, self.bounds),
                ))),
                None => None,
            },
            Screen::Gameplay(gameplay) => match gameplay.handle_event(event) {
                Some(GameplayOutcome::Quit) => Some(Transition::Exit),
                None => None,
            },
        };

        match transition {
            Some(Transition::To(next)) => {
                log::info!("screen {} -> {}", self.screen.label(), next.label());
                if let Screen::Customizer(customizer) = &self.screen {
                    if customizer.state().mode() == Mode::NameEntry {
                        self.pending_focus = Some(TextFocus::Lost);
                    }
                }
                self.screen = next;
                // Keys held across a screen change must not leak into it.
                self.input.release_all();
                AppFlow::Continue
            }
            Some(Transition::Exit) => {
                log::info!("exit requested from {}", self.screen.label());
                AppFlow::Exit
            }
            None => AppFlow::Continue,
        }
    }

    fn after_selection(&mut self, choice: Choice) -> Transition {
        match choice {
            Choice::Preset(index) => match preset_character(index) {
                Some(character) => {
                    log::info!("selected preset {}", character.name);
                    Transition::To(Screen::Gameplay(GameplayScreen::new(character, self.bounds)))
                }
                None => {
                    log::warn!("selection returned unknown preset {index}");
                    Transition::Exit
                }
            },
            Choice::CreateCustom => {
                let state = CustomizerState::new(self.tables, self.name_policy, &mut self.rng);
                Transition::To(Screen::Customizer(CustomizerScreen::new(state, self.bounds)))
            }
        }
    }

    /// One state-mutation pass for the frame.
    pub fn tick(&mut self) {
        if let Screen::Gameplay(gameplay) = &mut self.screen {
            gameplay.tick(&self.input);
        }
    }

    pub fn draw(&self) -> DrawList {
        match &self.screen {
            Screen::Selection(selection) => selection.draw(),
            Screen::Customizer(customizer) => customizer.draw(),
            Screen::Gameplay(gameplay) => gameplay.draw(),
        }
    }

    /// Text focus changes for the platform adapter, oldest first. The name
    /// field is the only text input, so they all stem from the customizer.
    pub fn take_focus_change(&mut self) -> Option<TextFocus> {
        if let Some(focus) = self.pending_focus.take() {
            return Some(focus);
        }
        match &mut self.screen {
            Screen::Customizer(customizer) => customizer.take_focus_change(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Key;

    fn app() -> App {
        App::new(&GameConfig::default())
    }

    fn press(app: &mut App, key: Key) -> AppFlow {
        app.handle_event(&InputEvent::key(key))
    }

    #[test]
    fn starts_on_selection() {
        assert!(matches!(app().screen(), Screen::Selection(_)));
    }

    #[test]
    fn preset_confirm_enters_gameplay() {
        let mut app = app();
        press(&mut app, Key::Right);
        press(&mut app, Key::Enter);
        let Screen::Gameplay(gameplay) = app.screen() else {
            panic!("expected gameplay, got {}", app.screen().label());
        };
        assert_eq!(gameplay.player_name(), "Mage");
    }

    #[test]
    fn custom_slot_opens_customizer_and_cancel_returns() {
        let mut app = app();
        press(&mut app, Key::Left);
        press(&mut app, Key::Enter);
        assert!(matches!(app.screen(), Screen::Customizer(_)));
        assert_eq!(app.take_focus_change(), Some(TextFocus::Gained));

        press(&mut app, Key::Escape);
        let Screen::Selection(selection) = app.screen() else {
            panic!("expected selection, got {}", app.screen().label());
        };
        assert_eq!(selection.selection().selected(), 3);
    }

    #[test]
    fn created_character_is_played() {
        let mut app = app();
        press(&mut app, Key::Left);
        press(&mut app, Key::Space);
        for c in "Hero".chars() {
            app.handle_event(&InputEvent::typed(c));
        }
        press(&mut app, Key::Enter);
        let Screen::Gameplay(gameplay) = app.screen() else {
            panic!("expected gameplay, got {}", app.screen().label());
        };
        assert_eq!(gameplay.player_name(), "Hero");
    }

    #[test]
    fn held_keys_do_not_leak_into_gameplay() {
        let mut app = app();
        // Enter is still "held" when gameplay starts; arrows pressed earlier too.
        press(&mut app, Key::Right);
        press(&mut app, Key::Enter);
        app.tick();
        let Screen::Gameplay(gameplay) = app.screen() else {
            panic!("expected gameplay");
        };
        assert_eq!(gameplay.player_position(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn gameplay_ticks_use_held_keys() {
        let mut app = app();
        press(&mut app, Key::Enter);
        press(&mut app, Key::D);
        app.tick();
        app.tick();
        app.handle_event(&InputEvent::KeyUp { key: Key::D });
        app.tick();
        let Screen::Gameplay(gameplay) = app.screen() else {
            panic!("expected gameplay");
        };
        assert_eq!(gameplay.player_position(), Vec2::new(410.0, 300.0));
    }

    #[test]
    fn escape_exits_from_selection_and_gameplay() {
        let mut app = app();
        assert_eq!(press(&mut app, Key::Escape), AppFlow::Exit);

        let mut app = super::tests::app();
        press(&mut app, Key::Enter);
        assert_eq!(press(&mut app, Key::Escape), AppFlow::Exit);
    }

    #[test]
    fn draw_follows_active_screen() {
        let mut app = app();
        assert!(app.draw().has_text("Select Your Character"));
        press(&mut app, Key::Left);
        press(&mut app, Key::Enter);
        assert!(app.draw().has_text("Character Creator"));
    }
}
