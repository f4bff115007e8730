//! Horizon geometry: the tangent from an observer to the planet circle.
//!
//! All inputs and outputs are in simulation units. Only one of the two
//! tangents is computed (the one on the clockwise side of the bearing to the
//! planet center); the other is its mirror image.
//!
//! The tangent point is produced relative to the circle's own origin. Every
//! caller passes the planet circle, which sits on the simulation origin, so
//! the relative point is also the absolute one. Reusing these functions for
//! a circle off the origin requires translating the result by `(c.x, c.y)`.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::Serialize;

use crate::camera::Point;

/// A circle in simulation units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Sightline from an observer to its horizon.
///
/// Derived data: a new result replaces the old one whenever the observer is
/// recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizonResult {
    /// Where the sightline touches the planet.
    pub intersect_point: Point,
    /// Length of the sightline in simulation units.
    pub distance: f64,
    /// Angle between the sightline and the horizontal, in degrees (0 to 90).
    pub angle_degrees: f64,
}

impl HorizonResult {
    /// Whether every component is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.intersect_point.x.is_finite()
            && self.intersect_point.y.is_finite()
            && self.distance.is_finite()
            && self.angle_degrees.is_finite()
    }
}

/// Tangent point on `c` of a line through `p`.
///
/// NaN when `p` lies inside the circle; callers keep observers at or above
/// the surface.
#[must_use]
pub fn tangent_point(c: Circle, p: Point) -> Point {
    let dx = c.x - p.x;
    let dy = c.y - p.y;
    let dd = dx.hypot(dy);
    let a = (c.radius / dd).asin();
    let b = dy.atan2(dx);

    let t = b - a;
    Point { x: c.radius * t.sin(), y: c.radius * -t.cos() }
}

/// Full horizon data for an observer at `p`: tangent point, sightline length,
/// and depression angle.
///
/// An observer on the surface has a zero-length sightline and a zero angle.
#[must_use]
pub fn horizon(c: Circle, p: Point) -> HorizonResult {
    let intersect_point = tangent_point(c, p);

    let dx = p.x - intersect_point.x;
    let distance = p.distance_to(intersect_point);

    let angle_degrees = if distance.abs() < f64::EPSILON {
        0.0
    } else {
        (dx.abs() / distance).clamp(0.0, 1.0).acos().to_degrees()
    };

    HorizonResult { intersect_point, distance, angle_degrees }
}
