//! Session report for the terminal: the details panel as text, or the whole
//! session as JSON.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use serde::Serialize;
use sightline_canvas::camera::Point;
use sightline_canvas::doc::ObserverSummary;
use sightline_canvas::engine::EngineCore;
use sightline_canvas::geometry::HorizonResult;

use crate::args::Format;

#[derive(Serialize)]
struct Report {
    planet: PlanetReport,
    observers: Vec<ObserverReport>,
}

#[derive(Serialize)]
struct PlanetReport {
    radius_km: f64,
    sim_radius: f64,
    km_per_unit: f64,
}

#[derive(Serialize)]
struct ObserverReport {
    #[serde(flatten)]
    summary: ObserverSummary,
    /// Observer position in simulation units.
    sim_point: Point,
    /// Raw tangent result in simulation units.
    horizon: HorizonResult,
}

/// Render the session in the requested format.
///
/// # Errors
///
/// Returns `Err` if JSON serialization fails.
pub fn render(core: &EngineCore, format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(text(core)),
        Format::Json => serde_json::to_string_pretty(&build(core)),
    }
}

fn text(core: &EngineCore) -> String {
    let mut lines = vec![format!(
        "Planet radius: {} ({:.2} km per unit)",
        core.planet_label(),
        core.planet.converter().km_per_unit()
    )];
    let details = core.describe_all();
    if details.is_empty() {
        lines.push("No observers.".to_owned());
    } else {
        lines.extend(details);
    }
    lines.join("\n")
}

fn build(core: &EngineCore) -> Report {
    let observers = core
        .summaries()
        .into_iter()
        .zip(core.observers.iter())
        .map(|(summary, observer)| ObserverReport { summary, sim_point: observer.sim_point, horizon: observer.horizon })
        .collect();

    Report {
        planet: PlanetReport {
            radius_km: core.planet.represented_radius_km(),
            sim_radius: core.planet.sim_radius(),
            km_per_unit: core.planet.converter().km_per_unit(),
        },
        observers,
    }
}
