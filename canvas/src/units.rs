//! Conversion between represented kilometers and on-screen simulation units.
//!
//! The planet is always drawn with the same simulation radius; only the
//! represented radius changes. A converter is therefore a snapshot of the
//! current scale and must be rebuilt from the [`crate::planet::Planet`]
//! after every radius change, never stored.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

/// Kilometer/simulation-unit scale for one planet radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConverter {
    km_per_unit: f64,
}

impl UnitConverter {
    /// Scale for a planet of `represented_radius_km` drawn with radius
    /// `sim_radius`. Both must be positive.
    #[must_use]
    pub fn new(represented_radius_km: f64, sim_radius: f64) -> Self {
        debug_assert!(sim_radius > 0.0, "simulation radius must be positive");
        Self { km_per_unit: represented_radius_km / sim_radius }
    }

    /// How many kilometers one simulation unit represents.
    #[must_use]
    pub fn km_per_unit(&self) -> f64 {
        self.km_per_unit
    }

    /// Kilometers to simulation units.
    #[must_use]
    pub fn to_sim(&self, km: f64) -> f64 {
        km / self.km_per_unit
    }

    /// Simulation units to kilometers.
    #[must_use]
    pub fn to_represented(&self, units: f64) -> f64 {
        units * self.km_per_unit
    }
}
