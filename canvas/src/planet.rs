//! The planet: a circle of fixed on-screen size standing in for a sphere of
//! adjustable real-world radius.

#[cfg(test)]
#[path = "planet_test.rs"]
mod planet_test;

use serde::Serialize;

use crate::camera::Point;
use crate::consts::{DEFAULT_PLANET_RADIUS_KM, PLANET_SIM_RADIUS};
use crate::geometry::Circle;
use crate::units::UnitConverter;

/// Planet state shared by every observer.
///
/// The circle is centered on the simulation origin and its simulation radius
/// never changes; [`Planet::set_represented_radius`] is the only mutation.
#[derive(Debug, Clone, Serialize)]
pub struct Planet {
    center: Point,
    sim_radius: f64,
    represented_radius_km: f64,
}

impl Default for Planet {
    fn default() -> Self {
        Self::new(DEFAULT_PLANET_RADIUS_KM)
    }
}

impl Planet {
    /// A planet of the given represented radius. The radius must already be
    /// validated positive.
    #[must_use]
    pub fn new(represented_radius_km: f64) -> Self {
        Self { center: Point::default(), sim_radius: PLANET_SIM_RADIUS, represented_radius_km }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn sim_radius(&self) -> f64 {
        self.sim_radius
    }

    #[must_use]
    pub fn represented_radius_km(&self) -> f64 {
        self.represented_radius_km
    }

    /// Replace the represented radius. Callers validate the value and then
    /// recompute every observer against the new scale.
    pub fn set_represented_radius(&mut self, radius_km: f64) {
        debug_assert!(radius_km > 0.0, "planet radius must be positive");
        self.represented_radius_km = radius_km;
    }

    /// The km/unit scale for the current radius.
    #[must_use]
    pub fn converter(&self) -> UnitConverter {
        UnitConverter::new(self.represented_radius_km, self.sim_radius)
    }

    /// The planet outline in simulation units.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle { x: self.center.x, y: self.center.y, radius: self.sim_radius }
    }

    /// Display label for the current radius, e.g. `6371km`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}km", self.represented_radius_km)
    }
}
