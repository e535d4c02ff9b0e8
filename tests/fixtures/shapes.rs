//! Shape helpers.

use std::f64::consts::PI;

/// Scale a value.
/// @param factor multiplier
/// @param value input
/// @return the scaled value
pub fn scale(factor: f64, value: f64) -> f64 {
    factor * value
}

// not documentation
pub fn hidden() {}

#[inline]
/** @deprecated use scale */
pub fn legacy(v: f64) -> f64 {
    v * PI
}
