#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn camera(center: (f64, f64), offset: (f64, f64), zoom: f64) -> Camera {
    Camera { center: Point::new(center.0, center.1), offset: Point::new(offset.0, offset.1), zoom }
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn point_distance_to() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!(approx_eq(a.distance_to(b), 5.0));
    assert!(approx_eq(b.distance_to(a), 5.0));
}

#[test]
fn point_distance_survives_huge_coordinates() {
    let d = Point::new(0.0, 0.0).distance_to(Point::new(3.0e200, 4.0e200));
    assert!(d.is_finite());
    assert!((d / 5.0e200 - 1.0).abs() < EPSILON);
}

#[test]
fn point_serializes_as_xy() {
    let json = serde_json::to_value(Point::new(1.5, -2.0)).unwrap_or_default();
    assert_eq!(json, serde_json::json!({ "x": 1.5, "y": -2.0 }));
}

// --- Camera defaults ---

#[test]
fn camera_default_zoom_is_one() {
    let cam = Camera::default();
    assert_eq!(cam.zoom, 1.0);
    assert_eq!(cam.offset, Point::default());
}

#[test]
fn centered_camera_offsets_by_center() {
    let cam = Camera::centered(Point::new(400.0, 300.0));
    assert_eq!(cam.offset, Point::new(400.0, 300.0));
    assert_eq!(cam.center, Point::new(400.0, 300.0));
}

#[test]
fn centered_camera_draws_origin_at_center() {
    let cam = Camera::centered(Point::new(400.0, 300.0));
    let screen = cam.world_to_screen(Point::new(0.0, 0.0));
    assert!(point_approx_eq(screen, Point::new(400.0, 300.0)));
}

// --- world_to_screen / screen_to_world ---

#[test]
fn world_to_screen_identity() {
    let cam = Camera::default();
    let screen = cam.world_to_screen(Point::new(50.0, 75.0));
    assert!(point_approx_eq(screen, Point::new(50.0, 75.0)));
}

#[test]
fn world_to_screen_zoom_pivots_on_center() {
    let cam = camera((100.0, 100.0), (100.0, 100.0), 2.0);
    // World origin sits on the center, so zoom leaves it there.
    assert!(point_approx_eq(cam.world_to_screen(Point::new(0.0, 0.0)), Point::new(100.0, 100.0)));
    // A point 10 units right lands 20 pixels right.
    assert!(point_approx_eq(cam.world_to_screen(Point::new(10.0, 0.0)), Point::new(120.0, 100.0)));
}

#[test]
fn world_to_screen_with_offset_and_zoom() {
    let cam = camera((100.0, 50.0), (0.0, 0.0), 2.0);
    // 100 + 2 * (10 + 0 - 100) = -80; 50 + 2 * (20 + 0 - 50) = -10
    let screen = cam.world_to_screen(Point::new(10.0, 20.0));
    assert!(point_approx_eq(screen, Point::new(-80.0, -10.0)));
}

#[test]
fn screen_to_world_inverts_world_to_screen() {
    let cam = camera((320.0, 240.0), (35.0, -12.0), 1.7);
    let world = Point::new(-42.0, 118.5);
    let back = cam.screen_to_world(cam.world_to_screen(world));
    assert!(point_approx_eq(back, world));
}

#[test]
fn screen_to_world_center_maps_to_center_minus_offset() {
    let cam = camera((200.0, 150.0), (210.0, 250.0), 3.0);
    let world = cam.screen_to_world(Point::new(200.0, 150.0));
    assert!(point_approx_eq(world, Point::new(-10.0, -100.0)));
}

#[test]
fn screen_dist_to_world_divides_by_zoom() {
    let cam = camera((0.0, 0.0), (0.0, 0.0), 4.0);
    assert!(approx_eq(cam.screen_dist_to_world(10.0), 2.5));
}

// --- pan ---

#[test]
fn pan_moves_offset_with_pointer() {
    let mut cam = Camera::default();
    cam.pan(Point::new(100.0, 100.0), Point::new(120.0, 110.0));
    assert!(point_approx_eq(cam.offset, Point::new(20.0, 10.0)));
}

#[test]
fn pan_divides_by_zoom() {
    let mut cam = camera((0.0, 0.0), (0.0, 0.0), 2.0);
    cam.pan(Point::new(0.0, 0.0), Point::new(20.0, -10.0));
    assert!(point_approx_eq(cam.offset, Point::new(10.0, -5.0)));
}

#[test]
fn pan_keeps_world_point_under_pointer() {
    let mut cam = camera((400.0, 300.0), (400.0, 400.0), 1.5);
    let grab = Point::new(250.0, 180.0);
    let world = cam.screen_to_world(grab);
    let release = Point::new(310.0, 95.0);
    cam.pan(grab, release);
    assert!(point_approx_eq(cam.screen_to_world(release), world));
}

// --- wheel_zoom ---

#[test]
fn wheel_down_zooms_out_one_step() {
    let mut cam = Camera::default();
    cam.wheel_zoom(120.0);
    assert!(approx_eq(cam.zoom, 0.9));
}

#[test]
fn wheel_up_zooms_in_one_step() {
    let mut cam = Camera::default();
    cam.wheel_zoom(-3.0);
    assert!(approx_eq(cam.zoom, 1.1));
}

#[test]
fn wheel_step_ignores_magnitude() {
    let mut a = Camera::default();
    let mut b = Camera::default();
    a.wheel_zoom(1.0);
    b.wheel_zoom(500.0);
    assert_eq!(a.zoom, b.zoom);
}

#[test]
fn wheel_zero_delta_is_noop() {
    let mut cam = Camera::default();
    cam.wheel_zoom(0.0);
    assert_eq!(cam.zoom, 1.0);
}

#[test]
fn wheel_zoom_clamps_min() {
    let mut cam = camera((0.0, 0.0), (0.0, 0.0), 0.15);
    cam.wheel_zoom(100.0);
    assert!(cam.zoom >= MIN_ZOOM);
    cam.wheel_zoom(100.0);
    assert_eq!(cam.zoom, MIN_ZOOM);
}

// --- recenter / reset ---

#[test]
fn recenter_carries_offset() {
    let mut cam = Camera::centered(Point::new(100.0, 50.0));
    cam.offset = Point::new(130.0, 70.0);
    cam.recenter(Point::new(200.0, 80.0));
    assert_eq!(cam.center, Point::new(200.0, 80.0));
    assert!(point_approx_eq(cam.offset, Point::new(230.0, 100.0)));
}

#[test]
fn recenter_keeps_origin_relative_to_center() {
    let mut cam = Camera::centered(Point::new(100.0, 50.0));
    cam.recenter(Point::new(640.0, 360.0));
    let screen = cam.world_to_screen(Point::new(0.0, 0.0));
    assert!(point_approx_eq(screen, Point::new(640.0, 360.0)));
}

#[test]
fn reset_focuses_planet_top() {
    let mut cam = Camera::centered(Point::new(400.0, 300.0));
    cam.offset = Point::new(-900.0, 12.0);
    cam.zoom = 1.0;
    cam.reset(100.0);
    assert!(point_approx_eq(cam.offset, Point::new(400.0, 400.0)));
    // The planet's top (0, -100) lands on the viewport center.
    let top = cam.world_to_screen(Point::new(0.0, -100.0));
    assert!(point_approx_eq(top, Point::new(400.0, 300.0)));
}

#[test]
fn reset_leaves_zoom() {
    let mut cam = Camera::centered(Point::new(10.0, 10.0));
    cam.zoom = 2.5;
    cam.reset(100.0);
    assert_eq!(cam.zoom, 2.5);
}
