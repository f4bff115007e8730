//! Boundary validation for user-entered values.
//!
//! The geometry core assumes its inputs are sane and never re-checks them:
//! a negative height puts the observer inside the planet and a non-positive
//! radius breaks the unit scale, both of which silently yield NaN. Everything
//! typed by a user passes through here first, and the error text is what the
//! host shows inline next to the offending control.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::doc::{self, ObserverRegistry};
use crate::planet::Planet;

/// A rejected user input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// The field did not parse as a number.
    #[error("{field} must be a number, got {input:?}")]
    NotANumber { field: &'static str, input: String },
    /// The observer would be below the surface.
    #[error("height must be zero or more kilometers, got {0}")]
    NegativeHeight(f64),
    /// The planet radius is zero, negative, subnormal, or not finite.
    #[error("planet radius must be a positive number of kilometers, got {0}")]
    NonPositiveRadius(f64),
    /// The observer is too far out for the planet's km/unit scale to place it.
    #[error("an observer {height_km}km up and {offset_km}km across is out of range for this planet")]
    OutOfRange { height_km: f64, offset_km: f64 },
    /// Resizing would push an existing observer out of range.
    #[error("a {radius_km}km planet would put observer #{id} out of range")]
    RadiusStrandsObserver { radius_km: f64, id: usize },
    /// The horizontal offset is infinite or NaN.
    #[error("offset must be a finite number of kilometers, got {0}")]
    NonFiniteOffset(f64),
    /// The zoom is zero, negative, or not finite.
    #[error("zoom must be a positive number, got {0}")]
    NonPositiveZoom(f64),
    /// No observer has this index.
    #[error("no observer #{0}")]
    UnknownObserver(usize),
}

/// Parse a form field as a number, trimming surrounding whitespace.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] when the text is not a decimal number.
pub fn parse_number(field: &'static str, input: &str) -> Result<f64, InputError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber { field, input: input.to_owned() })
}

/// Accept an observer height in kilometers above the surface.
///
/// # Errors
///
/// Returns [`InputError::NegativeHeight`] for negative or non-finite values.
pub fn height(km: f64) -> Result<f64, InputError> {
    if km.is_finite() && km >= 0.0 { Ok(km) } else { Err(InputError::NegativeHeight(km)) }
}

/// Accept a horizontal offset in kilometers.
///
/// # Errors
///
/// Returns [`InputError::NonFiniteOffset`] for infinite or NaN values.
pub fn offset(km: f64) -> Result<f64, InputError> {
    if km.is_finite() { Ok(km) } else { Err(InputError::NonFiniteOffset(km)) }
}

/// Accept a planet radius in kilometers.
///
/// # Errors
///
/// Returns [`InputError::NonPositiveRadius`] unless the value is a normal,
/// positive float. Subnormal radii make the km/unit scale itself subnormal.
pub fn planet_radius(km: f64) -> Result<f64, InputError> {
    if km.is_normal() && km > 0.0 { Ok(km) } else { Err(InputError::NonPositiveRadius(km)) }
}

/// Accept an observer placement only if its sightline stays finite on
/// `planet`, in simulation units and back in kilometers.
///
/// # Errors
///
/// Returns [`InputError::OutOfRange`] when the scale overflows.
pub fn placement(planet: &Planet, height_km: f64, offset_km: f64) -> Result<(), InputError> {
    if doc::fits(planet, height_km, offset_km) {
        Ok(())
    } else {
        Err(InputError::OutOfRange { height_km, offset_km })
    }
}

/// Accept a new planet radius only if every existing observer still fits.
///
/// # Errors
///
/// Returns [`InputError::RadiusStrandsObserver`] naming the first observer
/// that would overflow.
pub fn rescale(planet: &Planet, observers: &ObserverRegistry, radius_km: f64) -> Result<(), InputError> {
    let mut resized = planet.clone();
    resized.set_represented_radius(radius_km);
    match observers.first_out_of_range(&resized) {
        Some(id) => Err(InputError::RadiusStrandsObserver { radius_km, id }),
        None => Ok(()),
    }
}

/// Accept a manual zoom factor.
///
/// # Errors
///
/// Returns [`InputError::NonPositiveZoom`] unless the value is finite and
/// greater than zero.
pub fn zoom(factor: f64) -> Result<f64, InputError> {
    if factor.is_finite() && factor > 0.0 { Ok(factor) } else { Err(InputError::NonPositiveZoom(factor)) }
}
