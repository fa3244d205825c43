//! Tolerance constants for spectral testing.
//!
//! Different operations require different precision levels.

/// Floating point rounding errors for operations that should be exact
/// (superposition, DC offsets, unchanged inputs).
pub const FLOAT_EPSILON: f64 = 1e-9;

/// Values recovered through a forward transform of a synthesized signal.
pub const SPECTRAL_EPSILON: f64 = 1e-6;

/// Bins that should be empty after a synthesize → analyze round trip.
pub const LEAKAGE_THRESHOLD: f64 = 1e-3;
