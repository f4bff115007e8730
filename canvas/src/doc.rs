//! Observer model: observer records, their derived horizon data, and the
//! append-only registry that owns them.
//!
//! An observer is entered in kilometers (height above the surface and
//! horizontal offset) and placed in simulation space using the planet's
//! current scale. The placement and its horizon are cached on the record and
//! replaced wholesale by [`ObserverRegistry::recompute_all`] whenever the
//! planet radius changes. The renderer reads placements via
//! [`ObserverRegistry::iter`]; the details panel reads
//! [`ObserverRegistry::summary`].

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::Serialize;

use crate::camera::Point;
use crate::geometry::{HorizonResult, horizon};
use crate::planet::Planet;

/// Position of an observer in the registry; also its display number.
pub type ObserverId = usize;

/// An observer and its sightline.
#[derive(Debug, Clone, Serialize)]
pub struct Observer {
    /// Height above the surface in kilometers, as entered.
    pub height_km: f64,
    /// Horizontal offset in kilometers, as entered.
    pub offset_km: f64,
    /// Placement in simulation units; derived from the fields above.
    pub sim_point: Point,
    /// Sightline for `sim_point`; derived.
    pub horizon: HorizonResult,
    /// CSS color for the markers.
    pub color: String,
}

impl Observer {
    /// Place an observer on `planet`. Height and offset are expected to have
    /// passed [`crate::validate`].
    #[must_use]
    pub fn new(planet: &Planet, height_km: f64, offset_km: f64, color: String) -> Self {
        let sim_point = place(planet, height_km, offset_km);
        let horizon = horizon(planet.circle(), sim_point);
        debug_assert!(horizon.is_finite(), "observer placed out of range: {height_km}km, {offset_km}km");
        Self { height_km, offset_km, sim_point, horizon, color }
    }

    /// Re-derive the placement and horizon from the stored kilometers.
    pub fn recompute(&mut self, planet: &Planet) {
        self.sim_point = place(planet, self.height_km, self.offset_km);
        self.horizon = horizon(planet.circle(), self.sim_point);
        debug_assert!(self.horizon.is_finite(), "observer pushed out of range by a rescale");
    }
}

/// Whether an observer at these kilometers gets a finite placement and
/// sightline on `planet`, and a finite distance back in kilometers.
#[must_use]
pub fn fits(planet: &Planet, height_km: f64, offset_km: f64) -> bool {
    let at = place(planet, height_km, offset_km);
    let sightline = horizon(planet.circle(), at);
    at.x.is_finite()
        && at.y.is_finite()
        && sightline.is_finite()
        && planet.converter().to_represented(sightline.distance).is_finite()
}

/// Simulation-space point for an observer. Canvas y grows downward, so
/// "above the top of the planet" is negative y.
fn place(planet: &Planet, height_km: f64, offset_km: f64) -> Point {
    let conv = planet.converter();
    Point { x: conv.to_sim(offset_km), y: -(conv.to_sim(height_km) + planet.sim_radius()) }
}

/// Human-facing numbers for one observer, in kilometers and degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObserverSummary {
    pub id: ObserverId,
    pub height_km: f64,
    pub offset_km: f64,
    pub color: String,
    /// Sightline length converted back to kilometers.
    pub distance_km: f64,
    pub angle_degrees: f64,
}

impl fmt::Display for ObserverSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point #{} - Height: {}km | Distance to horizon: {:.2}km | Angle to horizon: {:.2} degrees",
            self.id, self.height_km, self.distance_km, self.angle_degrees
        )
    }
}

/// Append-only, index-ordered store of observers.
///
/// Observers are never removed or reordered, so an [`ObserverId`] handed out
/// by [`ObserverRegistry::add`] names the same observer for the whole session.
#[derive(Debug, Default)]
pub struct ObserverRegistry {
    observers: Vec<Observer>,
}

impl ObserverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { observers: Vec::new() }
    }

    /// Place a new observer on `planet` and append it. Returns its id.
    pub fn add(&mut self, planet: &Planet, height_km: f64, offset_km: f64, color: impl Into<String>) -> ObserverId {
        let id = self.observers.len();
        self.observers.push(Observer::new(planet, height_km, offset_km, color.into()));
        id
    }

    /// First observer, in id order, that would not fit on `planet`.
    #[must_use]
    pub fn first_out_of_range(&self, planet: &Planet) -> Option<ObserverId> {
        self.observers.iter().position(|o| !fits(planet, o.height_km, o.offset_km))
    }

    /// Recompute every observer against the planet's current scale, in order.
    pub fn recompute_all(&mut self, planet: &Planet) {
        for observer in &mut self.observers {
            observer.recompute(planet);
        }
    }

    /// Return a reference to an observer by id.
    #[must_use]
    pub fn get(&self, id: ObserverId) -> Option<&Observer> {
        self.observers.get(id)
    }

    /// Observers in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Observer> {
        self.observers.iter()
    }

    /// Kilometer/degree summary of one observer, using the planet's current scale.
    #[must_use]
    pub fn summary(&self, planet: &Planet, id: ObserverId) -> Option<ObserverSummary> {
        let observer = self.observers.get(id)?;
        let conv = planet.converter();
        Some(ObserverSummary {
            id,
            height_km: observer.height_km,
            offset_km: observer.offset_km,
            color: observer.color.clone(),
            distance_km: conv.to_represented(observer.horizon.distance),
            angle_degrees: observer.horizon.angle_degrees,
        })
    }

    /// Summaries of every observer in id order.
    #[must_use]
    pub fn summaries(&self, planet: &Planet) -> Vec<ObserverSummary> {
        (0..self.observers.len()).filter_map(|id| self.summary(planet, id)).collect()
    }

    /// One-line description of an observer for the details panel.
    #[must_use]
    pub fn describe(&self, planet: &Planet, id: ObserverId) -> Option<String> {
        self.summary(planet, id).map(|summary| summary.to_string())
    }

    /// Number of observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns `true` if no observer has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
