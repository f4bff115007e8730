//! Shared numeric constants for the canvas crate.

// ── Planet ──────────────────────────────────────────────────────

/// On-screen radius of the planet circle, in simulation units. Never zero.
pub const PLANET_SIM_RADIUS: f64 = 100.0;

/// Represented planet radius at startup, in kilometers (mean Earth radius).
pub const DEFAULT_PLANET_RADIUS_KM: f64 = 6371.0;

// ── Camera ──────────────────────────────────────────────────────

/// Zoom change per wheel notch.
pub const ZOOM_STEP: f64 = 0.1;

/// Smallest zoom the wheel can reach.
pub const MIN_ZOOM: f64 = 0.1;

// ── Rendering ───────────────────────────────────────────────────

/// Radius of observer and horizon markers, in screen pixels.
pub const MARKER_RADIUS_PX: f64 = 10.0;

/// Stroke color for the planet outline and sightlines.
pub const OUTLINE_COLOR: &str = "#000000";

/// Fill color for the planet disc.
pub const PLANET_FILL: &str = "#FFFFFF";

/// Observer color used when the caller supplies none.
pub const DEFAULT_OBSERVER_COLOR: &str = "#D94B4B";
