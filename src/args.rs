//! Command-line arguments and their value parsers.
//!
//! Parsers delegate to the engine's `validate` module so the terminal rejects
//! exactly what the browser form rejects, with the same messages.

#[cfg(test)]
#[path = "args_test.rs"]
mod args_test;

use clap::{Parser, ValueEnum};
use sightline_canvas::consts::{DEFAULT_OBSERVER_COLOR, DEFAULT_PLANET_RADIUS_KM};
use sightline_canvas::validate::{self, InputError};

#[derive(Parser, Debug)]
#[command(name = "sightline", version, about = "Horizon distance and angle for observers above a circular planet")]
pub struct Cli {
    /// Represented planet radius in kilometers
    #[arg(long, env = "SIGHTLINE_PLANET_RADIUS", default_value_t = DEFAULT_PLANET_RADIUS_KM, value_parser = parse_radius)]
    pub planet_radius: f64,

    /// Observer as HEIGHT[,OFFSET[,COLOR]] in kilometers; repeat for more
    #[arg(long = "observer", short = 'o', allow_hyphen_values = true, value_parser = parse_observer)]
    pub observers: Vec<ObserverSpec>,

    /// Planet radius in kilometers to switch to after every observer is added
    #[arg(long, value_parser = parse_radius)]
    pub rescale: Option<f64>,

    /// Report format
    #[arg(long, value_enum, env = "SIGHTLINE_FORMAT", default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One details line per observer.
    Text,
    /// Planet scale plus full observer data.
    Json,
}

/// One `--observer` value.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverSpec {
    pub height_km: f64,
    pub offset_km: f64,
    pub color: String,
}

fn parse_radius(s: &str) -> Result<f64, InputError> {
    validate::planet_radius(validate::parse_number("radius", s)?)
}

/// `HEIGHT[,OFFSET[,COLOR]]`. The color is everything after the second comma,
/// so `rgb(...)` colors survive intact.
fn parse_observer(s: &str) -> Result<ObserverSpec, InputError> {
    let mut parts = s.splitn(3, ',');
    let height_km = validate::height(validate::parse_number("height", parts.next().unwrap_or_default())?)?;
    let offset_km = match parts.next() {
        Some(text) if !text.trim().is_empty() => validate::offset(validate::parse_number("offset", text)?)?,
        _ => 0.0,
    };
    let color = match parts.next().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => DEFAULT_OBSERVER_COLOR.to_owned(),
    };
    Ok(ObserverSpec { height_km, offset_km, color })
}
