#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::Serialize;

use crate::consts::{MIN_ZOOM, ZOOM_STEP};

/// A point in either screen space or simulation space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Camera state for pan/zoom around the planet.
///
/// The view transform is `translate(center) ∘ scale(zoom) ∘ translate(-center) ∘ translate(offset)`:
/// zoom pivots on the viewport center, and `offset` moves the scene in
/// simulation units before scaling.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Viewport center in CSS pixels; the zoom pivot.
    pub center: Point,
    /// Scene translation, applied before zoom.
    pub offset: Point,
    /// Scale factor (1.0 = no zoom). Always positive.
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { center: Point::default(), offset: Point::default(), zoom: 1.0 }
    }
}

impl Camera {
    /// A camera for a viewport centered on `center`, with the scene origin
    /// drawn at that center.
    #[must_use]
    pub fn centered(center: Point) -> Self {
        Self { center, offset: center, zoom: 1.0 }
    }

    /// Convert a screen-space point (CSS pixels) to simulation coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.center.x) / self.zoom + self.center.x - self.offset.x,
            y: (screen.y - self.center.y) / self.zoom + self.center.y - self.offset.y,
        }
    }

    /// Convert a simulation-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: self.center.x + self.zoom * (world.x + self.offset.x - self.center.x),
            y: self.center.y + self.zoom * (world.y + self.offset.y - self.center.y),
        }
    }

    /// Convert a screen-space distance (pixels) to simulation-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Drag the scene from `last` to `current` (both screen points), keeping
    /// the content under the pointer.
    pub fn pan(&mut self, last: Point, current: Point) {
        let diff_x = (last.x - current.x) / self.zoom;
        let diff_y = (last.y - current.y) / self.zoom;
        self.offset.x -= diff_x;
        self.offset.y -= diff_y;
    }

    /// Step the zoom by one notch against the sign of a wheel delta
    /// (scrolling down zooms out). Zero deltas leave the zoom unchanged.
    pub fn wheel_zoom(&mut self, delta_y: f64) {
        let notch = if delta_y > 0.0 {
            1.0
        } else if delta_y < 0.0 {
            -1.0
        } else {
            0.0
        };
        self.zoom = (self.zoom - notch * ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Move the viewport center, carrying the offset along so the scene stays
    /// at the same place relative to the center.
    pub fn recenter(&mut self, center: Point) {
        self.offset.x += center.x - self.center.x;
        self.offset.y += center.y - self.center.y;
        self.center = center;
    }

    /// Focus the top of the planet, where observers sit.
    pub fn reset(&mut self, planet_sim_radius: f64) {
        self.offset = Point::new(self.center.x, self.center.y + planet_sim_radius);
    }
}
