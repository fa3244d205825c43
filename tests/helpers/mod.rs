//! Test helpers and fixtures for Prism integration tests
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-9): Exact operations (superposition, DC offsets)
//! - `SPECTRAL_EPSILON` (1e-6): Values recovered through a transform
//! - `LEAKAGE_THRESHOLD` (1e-3): Bins that should be empty after a round trip

#![allow(dead_code)]

pub mod tolerances;

use prism::prelude::*;
use std::f64::consts::PI;

/// Sample count used by the round-trip scenarios.
pub const TEST_POINTS: usize = 32;

/// Engine with default configuration.
pub fn test_engine() -> PrismEngine {
    PrismEngine::builder()
        .build()
        .expect("Failed to create test engine")
}

/// `n` samples of `amplitude · sin(2π·k·i/n + phase)` over one period.
pub fn generate_harmonic(k: usize, amplitude: f64, phase_degrees: f64, n: usize) -> Vec<f64> {
    let phase = phase_degrees * PI / 180.0;
    (0..n)
        .map(|i| amplitude * (2.0 * PI * k as f64 * i as f64 / n as f64 + phase).sin())
        .collect()
}

/// Constant signal.
pub fn generate_dc(value: f64, n: usize) -> Vec<f64> {
    vec![value; n]
}

/// Mean of `x²`.
pub fn mean_square(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|x| x * x).sum::<f64>() / samples.len() as f64
}

/// Largest absolute difference between two equally long sequences.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "length mismatch");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Grayscale field of `width × height` with one black pixel per column at
/// the row nearest `center - value · (center - 1)`.
pub fn draw_curve(samples: &[f64], height: usize) -> Vec<u8> {
    let width = samples.len();
    let center = height as f64 / 2.0;
    let mut pixels = vec![255u8; width * height];
    for (x, &value) in samples.iter().enumerate() {
        let row = (center - value * (center - 1.0)).round() as usize;
        pixels[row.min(height - 1) * width + x] = 0;
    }
    pixels
}
