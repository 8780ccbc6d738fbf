// Movement sandbox.
// One player entity in a bevy_ecs World; the steering schedule runs once
// per tick with the directional keys held at that moment.

use bevy_ecs::prelude::*;
use glam::Vec2;

use super::character::Character;
use super::sprite::draw_avatar;
use super::steering::clamp_to_bounds;
use crate::engine::{
    Anchor, Appearance, DrawList, Footprint, HeldDirections, Identity, InputEvent, InputState, Key,
    MoveTarget, Mover, PlayfieldBounds, Player, Rect, Rgb, Transform, gameplay_schedule,
};

/// Ticks the click marker stays visible after a click.
pub const MARKER_FRAMES: u32 = 30;

const GRASS: Rgb = Rgb::new(34, 139, 34);
const TUFT: Rgb = Rgb::new(40, 150, 40);
const MARKER: Rgb = Rgb::new(255, 255, 0);
const TUFT_SPACING: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameplayOutcome {
    Quit,
}

pub struct GameplayScreen {
    world: World,
    schedule: Schedule,
    player: Entity,
    bounds: Vec2,
}

impl GameplayScreen {
    pub fn new(character: Character, bounds: Vec2) -> Self {
        let mut world = World::new();
        world.insert_resource(PlayfieldBounds { size: bounds });
        world.insert_resource(HeldDirections::default());
        world.insert_resource(MoveTarget::default());

        let position = clamp_to_bounds(character.position, character.extent, bounds);
        let player = world
            .spawn((
                Player,
                Transform::from_position(position),
                Footprint { extent: character.extent },
                Mover { speed: character.speed },
                Appearance {
                    body: character.body_color,
                    eyes: character.eye_color,
                },
                Identity {
                    name: character.name,
                    description: character.description,
                },
            ))
            .id();

        log::info!("gameplay started at {position:?}");
        Self {
            world,
            schedule: gameplay_schedule(),
            player,
            bounds,
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Option<GameplayOutcome> {
        match event {
            InputEvent::KeyDown {
                key: Key::Escape,
                repeat: false,
                ..
            } => Some(GameplayOutcome::Quit),
            InputEvent::PointerDown { pos } => {
                self.world.resource_mut::<MoveTarget>().set(*pos, MARKER_FRAMES);
                log::debug!("click-to-move target {pos:?}");
                None
            }
            _ => None,
        }
    }

    /// One state-mutation pass using the keys held right now.
    pub fn tick(&mut self, input: &InputState) {
        *self.world.resource_mut::<HeldDirections>() = held_directions(input);
        self.schedule.run(&mut self.world);
    }

    pub fn player_position(&self) -> Vec2 {
        self.world
            .get::<Transform>(self.player)
            .map_or(Vec2::ZERO, |t| t.position)
    }

    pub fn player_name(&self) -> &str {
        self.world
            .get::<Identity>(self.player)
            .map_or("", |i| i.name.as_str())
    }

    pub fn move_target(&self) -> MoveTarget {
        *self.world.resource::<MoveTarget>()
    }

    pub fn draw(&self) -> DrawList {
        let mut list = DrawList::new(GRASS);
        let (w, h) = (self.bounds.x, self.bounds.y);

        for x in (0..w as usize).step_by(TUFT_SPACING) {
            for y in (0..h as usize).step_by(TUFT_SPACING) {
                list.fill(Rect::new(x as f32 + 5.0, y as f32 + 5.0, 10.0, 10.0), TUFT);
            }
        }

        let target = self.move_target();
        if let Some(point) = target.point.filter(|_| target.marker_visible()) {
            let alpha = target.marker_frames as f32 / MARKER_FRAMES as f32;
            list.fill_alpha(Rect::from_center_size(point, Vec2::new(14.0, 2.0)), MARKER, alpha);
            list.fill_alpha(Rect::from_center_size(point, Vec2::new(2.0, 14.0)), MARKER, alpha);
        }

        let extent = self.world.get::<Footprint>(self.player).map_or(0.0, |f| f.extent);
        if let Some(appearance) = self.world.get::<Appearance>(self.player) {
            draw_avatar(&mut list, self.player_position(), extent, appearance.body, appearance.eyes);
        }

        let hud = format!(
            "Character: {} | WASD/Arrows or click to move | ESC to quit",
            self.player_name()
        );
        let hud_width = hud.chars().count() as f32 * 8.5 + 20.0;
        list.fill_alpha(Rect::new(10.0, 10.0, hud_width, 30.0), Rgb::BLACK, 0.5);
        list.text(Vec2::new(20.0, 15.0), hud, 18.0, Rgb::WHITE, Anchor::LeftTop);
        list
    }
}

/// Arrow keys with WASD as aliases.
pub fn held_directions(input: &InputState) -> HeldDirections {
    HeldDirections {
        up: input.is_key_held(Key::Up) || input.is_key_held(Key::W),
        down: input.is_key_held(Key::Down) || input.is_key_held(Key::S),
        left: input.is_key_held(Key::Left) || input.is_key_held(Key::A),
        right: input.is_key_held(Key::Right) || input.is_key_held(Key::D),
    }
}
