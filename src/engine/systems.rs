// ECS systems for updating the gameplay world
// Run once per tick, in order: steering_system, then marker_system.

use bevy_ecs::prelude::*;

use super::components::*;
use crate::game::steering::{self, Body};

/// Move the player from held keys or the click-to-move target, then clamp
/// it into the playfield.
pub fn steering_system(
    directions: Res<HeldDirections>,
    bounds: Res<PlayfieldBounds>,
    mut target: ResMut<MoveTarget>,
    mut query: Query<(&mut Transform, &Footprint, &Mover), With<Player>>,
) {
    for (mut transform, footprint, mover) in &mut query {
        let body = Body {
            position: transform.position,
            extent: footprint.extent,
            speed: mover.speed,
        };
        let had_target = target.point.is_some();
        transform.position = steering::advance(body, *directions, &mut target.point, bounds.size);
        if had_target && target.point.is_none() && !directions.any() {
            log::debug!("arrived at click target, position {:?}", transform.position);
        }
    }
}

/// Count down the click marker while a target is pending. Purely visual.
pub fn marker_system(mut target: ResMut<MoveTarget>) {
    if target.point.is_some() {
        target.marker_frames = target.marker_frames.saturating_sub(1);
    }
}

/// The per-tick gameplay schedule.
pub fn gameplay_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((steering_system, marker_system).chain());
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn world_with_player(position: Vec2) -> (World, Entity) {
        let mut world = World::new();
        world.insert_resource(PlayfieldBounds {
            size: Vec2::new(800.0, 600.0),
        });
        world.insert_resource(HeldDirections::default());
        world.insert_resource(MoveTarget::default());
        let player = world
            .spawn((
                Player,
                Transform::from_position(position),
                Footprint { extent: 32.0 },
                Mover { speed: 5.0 },
            ))
            .id();
        (world, player)
    }

    #[test]
    fn steering_moves_player_from_held_keys() {
        let (mut world, player) = world_with_player(Vec2::new(400.0, 300.0));
        world.resource_mut::<HeldDirections>().right = true;
        let mut schedule = gameplay_schedule();
        schedule.run(&mut world);
        let transform = world.get::<Transform>(player).copied();
        assert_eq!(transform.map(|t| t.position), Some(Vec2::new(405.0, 300.0)));
    }

    #[test]
    fn marker_counts_down_while_target_pending() {
        let (mut world, _) = world_with_player(Vec2::new(0.0, 0.0));
        world.resource_mut::<MoveTarget>().set(Vec2::new(700.0, 500.0), 3);
        let mut schedule = gameplay_schedule();
        for _ in 0..5 {
            schedule.run(&mut world);
        }
        let target = *world.resource::<MoveTarget>();
        assert!(target.point.is_some());
        assert_eq!(target.marker_frames, 0);
    }

    #[test]
    fn marker_stops_when_target_cleared() {
        let (mut world, _) = world_with_player(Vec2::new(100.0, 100.0));
        world.resource_mut::<MoveTarget>().set(Vec2::new(118.0, 118.0), 30);
        let mut schedule = gameplay_schedule();
        schedule.run(&mut world);
        let target = *world.resource::<MoveTarget>();
        assert_eq!(target.point, None);
        assert_eq!(target.marker_frames, 30);
    }

    #[test]
    fn entities_without_player_marker_are_ignored() {
        let (mut world, _) = world_with_player(Vec2::new(400.0, 300.0));
        let prop = world
            .spawn((
                Transform::from_position(Vec2::new(10.0, 10.0)),
                Footprint { extent: 32.0 },
                Mover { speed: 5.0 },
            ))
            .id();
        world.resource_mut::<HeldDirections>().down = true;
        gameplay_schedule().run(&mut world);
        let transform = world.get::<Transform>(prop).copied();
        assert_eq!(transform.map(|t| t.position), Some(Vec2::new(10.0, 10.0)));
    }
}
