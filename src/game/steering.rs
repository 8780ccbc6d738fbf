// Per-tick movement model for the player avatar.
//
// Exactly one motion source is active per tick:
//   1. held directional keys  (axis-aligned, +-speed per axis)
//   2. click-to-move target   (constant-speed approach toward a point)
//   3. nothing                (zero displacement)
// The result is applied to the position and clamped into the playfield.

use glam::Vec2;

use crate::engine::HeldDirections;

/// Displacement for one tick of keyboard movement, or `None` when no
/// directional key is held.
///
/// Each direction is checked independently in the order up, down, left,
/// right and overwrites its axis, so down beats up and right beats left when
/// both are held. Opposite keys never cancel to zero.
pub fn keyboard_displacement(keys: HeldDirections, speed: f32) -> Option<Vec2> {
    if !keys.any() {
        return None;
    }
    let mut delta = Vec2::ZERO;
    if keys.up {
        delta.y = -speed;
    }
    if keys.down {
        delta.y = speed;
    }
    if keys.left {
        delta.x = -speed;
    }
    if keys.right {
        delta.x = speed;
    }
    Some(delta)
}

/// Displacement toward `target` from `center`. Returns `None` on arrival,
/// i.e. when the target is closer than one tick of travel.
pub fn seek_displacement(center: Vec2, target: Vec2, speed: f32) -> Option<Vec2> {
    let to_target = target - center;
    let distance = to_target.length();
    if distance < speed {
        return None;
    }
    Some(to_target / distance * speed)
}

/// Clamp a top-left position so a square of side `extent` stays inside
/// `bounds`. Each axis is clamped independently.
pub fn clamp_to_bounds(position: Vec2, extent: f32, bounds: Vec2) -> Vec2 {
    let max = (bounds - Vec2::splat(extent)).max(Vec2::ZERO);
    position.clamp(Vec2::ZERO, max)
}

/// Everything `advance` needs to know about the moving body.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub position: Vec2,
    pub extent: f32,
    pub speed: f32,
}

impl Body {
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.extent * 0.5)
    }
}

/// Run one steering tick and return the new position.
///
/// Held keys discard any pending target even when they net to no motion.
/// Reaching the target clears it and leaves the body in place this tick.
/// A non-positive speed moves nothing and leaves the target untouched.
pub fn advance(body: Body, keys: HeldDirections, target: &mut Option<Vec2>, bounds: Vec2) -> Vec2 {
    if body.speed <= 0.0 {
        return clamp_to_bounds(body.position, body.extent, bounds);
    }

    let delta = if let Some(delta) = keyboard_displacement(keys, body.speed) {
        *target = None;
        delta
    } else if let Some(point) = *target {
        match seek_displacement(body.center(), point, body.speed) {
            Some(delta) => delta,
            None => {
                *target = None;
                Vec2::ZERO
            }
        }
    } else {
        Vec2::ZERO
    };

    clamp_to_bounds(body.position + delta, body.extent, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn body_at(x: f32, y: f32) -> Body {
        Body {
            position: Vec2::new(x, y),
            extent: 32.0,
            speed: 5.0,
        }
    }

    fn keys(up: bool, down: bool, left: bool, right: bool) -> HeldDirections {
        HeldDirections { up, down, left, right }
    }

    #[rstest]
    #[case::up(keys(true, false, false, false), Vec2::new(0.0, -5.0))]
    #[case::down(keys(false, true, false, false), Vec2::new(0.0, 5.0))]
    #[case::left(keys(false, false, true, false), Vec2::new(-5.0, 0.0))]
    #[case::right(keys(false, false, false, true), Vec2::new(5.0, 0.0))]
    #[case::diagonal(keys(true, false, false, true), Vec2::new(5.0, -5.0))]
    #[case::up_and_down_last_wins(keys(true, true, false, false), Vec2::new(0.0, 5.0))]
    #[case::left_and_right_last_wins(keys(false, false, true, true), Vec2::new(5.0, 0.0))]
    #[case::all_four(keys(true, true, true, true), Vec2::new(5.0, 5.0))]
    fn keyboard_axes_are_plus_minus_speed(#[case] held: HeldDirections, #[case] expected: Vec2) {
        assert_eq!(keyboard_displacement(held, 5.0), Some(expected));
    }

    #[test]
    fn no_keys_means_no_keyboard_motion() {
        assert_eq!(keyboard_displacement(HeldDirections::default(), 5.0), None);
    }

    #[test]
    fn keyboard_preempts_click_target() {
        let mut target = Some(Vec2::new(700.0, 500.0));
        let next = advance(body_at(100.0, 100.0), keys(true, false, false, false), &mut target, BOUNDS);
        assert_eq!(target, None);
        assert_eq!(next, Vec2::new(100.0, 95.0));
    }

    #[test]
    fn target_inside_one_step_arrives_without_moving() {
        // Center is (116, 116); the target sits about 2.83 px away.
        let mut target = Some(Vec2::new(118.0, 118.0));
        let next = advance(body_at(100.0, 100.0), HeldDirections::default(), &mut target, BOUNDS);
        assert_eq!(target, None);
        assert_eq!(next, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn target_on_center_arrives_immediately() {
        let body = body_at(200.0, 200.0);
        let mut target = Some(body.center());
        let next = advance(body, HeldDirections::default(), &mut target, BOUNDS);
        assert_eq!(target, None);
        assert_eq!(next, body.position);
    }

    #[test]
    fn seeking_moves_exactly_speed_toward_target() {
        let body = body_at(100.0, 100.0);
        let mut target = Some(Vec2::new(416.0, 516.0));
        let next = advance(body, HeldDirections::default(), &mut target, BOUNDS);
        let moved = next - body.position;
        assert_relative_eq!(moved.length(), 5.0, epsilon = 1e-4);
        // (300, 400) from the center is a 3-4-5 triangle.
        assert_relative_eq!(moved.x, 3.0, epsilon = 1e-4);
        assert_relative_eq!(moved.y, 4.0, epsilon = 1e-4);
        assert!(target.is_some());
    }

    #[test]
    fn seeking_eventually_arrives_and_stops() {
        let mut body = body_at(0.0, 0.0);
        let goal = Vec2::new(316.0, 16.0);
        let mut target = Some(goal);
        let mut ticks = 0;
        while target.is_some() {
            body.position = advance(body, HeldDirections::default(), &mut target, BOUNDS);
            ticks += 1;
            assert!(ticks < 200, "never arrived");
        }
        assert!(body.center().distance(goal) < 5.0);
    }

    #[test]
    fn no_input_and_no_target_stays_put() {
        let mut target = None;
        let next = advance(body_at(42.0, 24.0), HeldDirections::default(), &mut target, BOUNDS);
        assert_eq!(next, Vec2::new(42.0, 24.0));
    }

    #[rstest]
    #[case::left_edge(body_at(2.0, 300.0), keys(false, false, true, false), Vec2::new(0.0, 300.0))]
    #[case::top_edge(body_at(300.0, 1.0), keys(true, false, false, false), Vec2::new(300.0, 0.0))]
    #[case::right_edge(body_at(766.0, 300.0), keys(false, false, false, true), Vec2::new(768.0, 300.0))]
    #[case::bottom_edge(body_at(300.0, 567.0), keys(false, true, false, false), Vec2::new(300.0, 568.0))]
    fn crossing_a_boundary_is_partially_applied(
        #[case] body: Body,
        #[case] held: HeldDirections,
        #[case] expected: Vec2,
    ) {
        let mut target = None;
        assert_eq!(advance(body, held, &mut target, BOUNDS), expected);
    }

    #[test]
    fn clamp_is_idempotent() {
        let once = clamp_to_bounds(Vec2::new(-40.0, 900.0), 32.0, BOUNDS);
        assert_eq!(once, Vec2::new(0.0, 568.0));
        assert_eq!(clamp_to_bounds(once, 32.0, BOUNDS), once);
    }

    #[test]
    fn clamp_handles_extent_larger_than_bounds() {
        let pos = clamp_to_bounds(Vec2::new(5.0, 5.0), 64.0, Vec2::new(32.0, 32.0));
        assert_eq!(pos, Vec2::ZERO);
    }

    #[test]
    fn post_update_position_always_in_bounds() {
        let mut body = body_at(400.0, 300.0);
        let mut target = None;
        let patterns = [
            keys(true, false, true, false),
            keys(false, true, false, true),
            keys(true, true, true, true),
            keys(false, false, true, false),
        ];
        for step in 0..600 {
            let held = patterns[(step / 150) % patterns.len()];
            body.position = advance(body, held, &mut target, BOUNDS);
            assert!(body.position.x >= 0.0 && body.position.x <= BOUNDS.x - body.extent);
            assert!(body.position.y >= 0.0 && body.position.y <= BOUNDS.y - body.extent);
        }
    }

    #[test]
    fn zero_speed_is_a_no_op() {
        let mut body = body_at(100.0, 100.0);
        body.speed = 0.0;
        let mut target = Some(Vec2::new(500.0, 500.0));
        let next = advance(body, keys(true, false, false, false), &mut target, BOUNDS);
        assert_eq!(next, body.position);
        assert_eq!(target, Some(Vec2::new(500.0, 500.0)));
    }
}
