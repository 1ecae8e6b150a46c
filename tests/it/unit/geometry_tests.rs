//! Property tests for the coordinate math.

use flowcanvas::geometry::{
    Vec2, delta_screen_to_world, delta_world_to_screen, point_in_marquee, screen_to_world,
    world_to_screen,
};
use proptest::prelude::*;

fn close(a: f32, b: f32) -> bool {
    let tolerance = 1e-2_f32.max(a.abs().max(b.abs()) * 1e-3);
    (a - b).abs() <= tolerance
}

proptest! {
    /// world_to_screen is the exact inverse of screen_to_world for every
    /// finite positive zoom.
    #[test]
    fn transform_round_trip(
        x in -1e4f32..1e4,
        y in -1e4f32..1e4,
        zoom in 0.05f32..10.0,
        ox in -1e4f32..1e4,
        oy in -1e4f32..1e4,
    ) {
        let p = Vec2::new(x, y);
        let offset = Vec2::new(ox, oy);
        let back = world_to_screen(screen_to_world(p, zoom, offset), zoom, offset);
        prop_assert!(close(back.x, p.x), "x: {} vs {}", back.x, p.x);
        prop_assert!(close(back.y, p.y), "y: {} vs {}", back.y, p.y);
    }

    #[test]
    fn delta_round_trip(
        x in -1e4f32..1e4,
        y in -1e4f32..1e4,
        zoom in 0.05f32..10.0,
    ) {
        let d = Vec2::new(x, y);
        let back = delta_world_to_screen(delta_screen_to_world(d, zoom), zoom);
        prop_assert!(close(back.x, d.x));
        prop_assert!(close(back.y, d.y));
    }

    /// Marquee containment is independent of which corner the drag started
    /// from.
    #[test]
    fn marquee_corner_order_is_irrelevant(
        px in -100f32..100.0,
        py in -100f32..100.0,
        ax in -100f32..100.0,
        ay in -100f32..100.0,
        bx in -100f32..100.0,
        by in -100f32..100.0,
    ) {
        let p = Vec2::new(px, py);
        let a = Vec2::new(ax, ay);
        let b = Vec2::new(bx, by);
        prop_assert_eq!(point_in_marquee(p, a, b), point_in_marquee(p, b, a));
    }
}

#[test]
fn screen_to_world_formula() {
    // (p - offset) / zoom
    let world = screen_to_world(Vec2::new(110.0, 60.0), 2.0, Vec2::new(10.0, 20.0));
    assert_eq!(world, Vec2::new(50.0, 20.0));
}

#[test]
fn world_to_screen_formula() {
    // p * zoom + offset
    let screen = world_to_screen(Vec2::new(50.0, 20.0), 2.0, Vec2::new(10.0, 20.0));
    assert_eq!(screen, Vec2::new(110.0, 60.0));
}
