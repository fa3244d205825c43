//! Pixel-space curve points.
//!
//! Maps one period of a waveform onto a `width × height` drawing area with
//! the zero line at `height / 2` and positive values drawn upward.

use crate::{Error, Result};
use prism_core::math::sine_value;
use std::f64::consts::PI;

/// Amplitude that fills 80% of the half height.
pub const MAX_DISPLAY_AMPLITUDE: f64 = 2.0;

/// Fraction of the half height used by [`MAX_DISPLAY_AMPLITUDE`].
const DISPLAY_HEADROOM: f64 = 0.8;

/// A point in pixel coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

fn vertical_scale(height: f64) -> f64 {
    (height / 2.0 * DISPLAY_HEADROOM) / MAX_DISPLAY_AMPLITUDE
}

/// Points of `amplitude · sin(x + phase)` over exactly one period.
///
/// Pixel x runs from 0 to `width` inclusive in steps of `resolution`.
pub fn sine_curve_points(
    width: usize,
    height: usize,
    amplitude: f64,
    phase_degrees: f64,
    resolution: usize,
) -> Result<Vec<CurvePoint>> {
    if width == 0 {
        return Err(Error::InvalidParameter("width must be non-zero".to_string()));
    }
    if resolution == 0 {
        return Err(Error::InvalidParameter(
            "resolution must be non-zero".to_string(),
        ));
    }

    let center_y = height as f64 / 2.0;
    let scale = vertical_scale(height as f64);

    let points = (0..=width)
        .step_by(resolution)
        .map(|pixel_x| {
            let math_x = (pixel_x as f64 / width as f64) * 2.0 * PI;
            let value = sine_value(math_x, amplitude, phase_degrees);
            CurvePoint {
                x: pixel_x as f64,
                y: center_y - value * scale,
            }
        })
        .collect();

    Ok(points)
}

/// Place one period of samples in the pixel space of [`sine_curve_points`].
///
/// Sample `i` of `n` sits at `x = i · width / n`, so sample 0 is at x = 0
/// and x = `width` (the start of the next period) is never reached.
pub fn waveform_points(samples: &[f64], width: usize, height: usize) -> Vec<CurvePoint> {
    let center_y = height as f64 / 2.0;
    let scale = vertical_scale(height as f64);
    let len = samples.len() as f64;

    samples
        .iter()
        .enumerate()
        .map(|(i, &value)| CurvePoint {
            x: i as f64 * width as f64 / len,
            y: center_y - value * scale,
        })
        .collect()
}
