#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn planet() -> Circle {
    Circle { x: 0.0, y: 0.0, radius: 100.0 }
}

/// Observer `height` units above the top of the planet, `offset` units to the right.
fn above(height: f64, offset: f64) -> Point {
    Point::new(offset, -(height + 100.0))
}

// =============================================================
// tangent_point
// =============================================================

#[test]
fn tangent_point_lies_on_circle() {
    for (h, o) in [(1.0, 0.0), (15.7, 0.0), (50.0, 30.0), (400.0, -120.0)] {
        let t = tangent_point(planet(), above(h, o));
        let r = (t.x * t.x + t.y * t.y).sqrt();
        assert!(approx_eq(r, 100.0), "height {h}, offset {o}: radius {r}");
    }
}

#[test]
fn tangent_is_perpendicular_to_radius() {
    for (h, o) in [(1.0, 0.0), (15.7, 0.0), (50.0, 30.0), (400.0, -120.0)] {
        let p = above(h, o);
        let t = tangent_point(planet(), p);
        let dot = t.x * (p.x - t.x) + t.y * (p.y - t.y);
        assert!(dot.abs() < 1e-6, "height {h}, offset {o}: dot {dot}");
    }
}

#[test]
fn tangent_from_directly_above_is_on_the_right() {
    let t = tangent_point(planet(), above(50.0, 0.0));
    assert!(t.x > 0.0);
    assert!(t.y < 0.0);
}

#[test]
fn tangent_point_is_relative_to_circle_origin() {
    // The same observer relative to a shifted circle yields the same point:
    // the result is not translated by the circle center.
    let shifted = Circle { x: 500.0, y: -40.0, radius: 100.0 };
    let p = Point::new(500.0 + 20.0, -40.0 - 180.0);
    let local = tangent_point(planet(), Point::new(20.0, -180.0));
    let t = tangent_point(shifted, p);
    assert!(approx_eq(t.x, local.x));
    assert!(approx_eq(t.y, local.y));
}

#[test]
fn tangent_point_inside_circle_is_nan() {
    let t = tangent_point(planet(), Point::new(0.0, -50.0));
    assert!(t.x.is_nan());
    assert!(t.y.is_nan());
}

// =============================================================
// horizon
// =============================================================

#[test]
fn surface_observer_degenerates_to_surface_point() {
    let result = horizon(planet(), above(0.0, 0.0));
    assert!(approx_eq(result.intersect_point.x, 0.0));
    assert!(approx_eq(result.intersect_point.y, -100.0));
    assert!(approx_eq(result.distance, 0.0));
    assert_eq!(result.angle_degrees, 0.0);
    assert!(result.is_finite());
}

#[test]
fn distance_matches_tangent_length() {
    for h in [0.5, 10.0, 15.696_123, 100.0, 1000.0] {
        let d = 100.0 + h;
        let result = horizon(planet(), above(h, 0.0));
        let expected = (d * d - 100.0 * 100.0).sqrt();
        assert!((result.distance - expected).abs() < 1e-6, "height {h}");
    }
}

#[test]
fn angle_matches_dip_formula() {
    for h in [0.5, 10.0, 100.0, 1000.0] {
        let result = horizon(planet(), above(h, 0.0));
        let expected = (100.0 / (100.0 + h)).acos().to_degrees();
        assert!((result.angle_degrees - expected).abs() < 1e-6, "height {h}");
    }
}

#[test]
fn distance_strictly_increases_with_height() {
    let mut last = horizon(planet(), above(0.0, 0.0)).distance;
    for step in 1..=200 {
        let h = f64::from(step) * 0.75;
        let d = horizon(planet(), above(h, 0.0)).distance;
        assert!(d > last, "height {h}: {d} <= {last}");
        last = d;
    }
}

#[test]
fn angle_stays_within_bounds() {
    for h in [0.0, 0.001, 1.0, 37.5, 100.0, 1.0e4, 1.0e7] {
        for o in [-300.0, -20.0, 0.0, 5.0, 250.0] {
            let result = horizon(planet(), above(h, o));
            assert!(
                (0.0..=90.0).contains(&result.angle_degrees),
                "height {h}, offset {o}: {}",
                result.angle_degrees
            );
        }
    }
}

#[test]
fn far_observer_sees_steep_sightline() {
    let result = horizon(planet(), above(1.0e6, 0.0));
    assert!(result.angle_degrees > 89.9);
}

#[test]
fn valid_observer_gives_finite_result() {
    let result = horizon(planet(), above(42.0, -17.0));
    assert!(result.is_finite());
}

#[test]
fn observer_inside_planet_propagates_nan() {
    let result = horizon(planet(), Point::new(10.0, -20.0));
    assert!(!result.is_finite());
    assert!(result.distance.is_nan());
    assert!(result.angle_degrees.is_nan());
}

#[test]
fn earth_example_matches_classical_horizon() {
    // 1000 km above a 6371 km planet drawn at radius 100.
    let unit = 6371.0 / 100.0;
    let p = Point::new(0.0, -(1000.0 / unit + 100.0));
    assert!((p.y - -115.696).abs() < 0.01);

    let result = horizon(planet(), p);
    let km = result.distance * unit;
    let classical = (1000.0_f64 * 1000.0 + 2.0 * 1000.0 * 6371.0).sqrt();
    assert!((km - classical).abs() / classical < 0.03, "{km} vs {classical}");
}

// =============================================================
// Extreme scales
// =============================================================

#[test]
fn far_observer_keeps_finite_sightline() {
    // Squaring 1.6e158 overflows; the distance must not.
    let p = above(1.6e158, 0.0);
    let result = horizon(planet(), p);
    assert!(result.is_finite(), "{result:?}");
    assert!((result.distance / 1.6e158 - 1.0).abs() < EPSILON);
    assert!(approx_eq(result.angle_degrees, 90.0));
}

#[test]
fn far_tangent_point_stays_on_circle() {
    let t = tangent_point(planet(), above(1.0e200, 3.0e199));
    assert!(approx_eq(t.x.hypot(t.y), 100.0), "{t:?}");
}
