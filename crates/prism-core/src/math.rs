//! Angle and sine helpers shared by the analyzer and the synthesizer.
//!
//! Phases travel through the engine in degrees (that is what a phase knob
//! shows); trigonometry happens in radians.

use std::f64::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Wrap an angle in degrees into `[0, 360)`.
///
/// Non-finite input is returned unchanged.
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return degrees;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Value of `amplitude * sin(x + phase)` with `phase` in degrees.
///
/// `x` is in radians; frequency is handled by the caller's x mapping.
#[inline]
pub fn sine_value(x: f64, amplitude: f64, phase_degrees: f64) -> f64 {
    amplitude * (x + degrees_to_radians(phase_degrees)).sin()
}
