// Pixel-art avatar: a coloured square with two white eyes and square pupils.
// Proportions are authored on a 32 px grid and scaled to the requested size.

use glam::Vec2;

use crate::engine::{DrawList, Rect, Rgb};

const GRID: f32 = 32.0;
const EYE_WHITES: [(f32, f32, f32, f32); 2] = [(8.0, 10.0, 6.0, 6.0), (18.0, 10.0, 6.0, 6.0)];
const PUPILS: [(f32, f32, f32, f32); 2] = [(10.0, 12.0, 2.0, 2.0), (20.0, 12.0, 2.0, 2.0)];

pub fn draw_avatar(list: &mut DrawList, top_left: Vec2, size: f32, body: Rgb, eyes: Rgb) {
    let scale = size / GRID;
    let cell = |(x, y, w, h): (f32, f32, f32, f32)| {
        Rect::new(top_left.x + x * scale, top_left.y + y * scale, w * scale, h * scale)
    };

    list.fill(Rect::new(top_left.x, top_left.y, size, size), body);
    for eye in EYE_WHITES {
        list.fill(cell(eye), Rgb::WHITE);
    }
    for pupil in PUPILS {
        list.fill(cell(pupil), eyes);
    }
}
