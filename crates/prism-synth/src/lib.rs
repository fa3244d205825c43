//! Additive synthesis for Prism.
//!
//! - **[`synthesize`]** - rebuild one period of a waveform from components
//! - **[`sine_curve_points`] / [`waveform_points`]** - pixel-space points for
//!   drawing a curve
//! - **[`OscillatorBank`]** - map components onto sine oscillators for
//!   playback, with an offline renderer
//!
//! # Quick Start
//!
//! ```rust
//! use prism_core::SpectralComponent;
//! use prism_synth::synthesize;
//!
//! let components = [
//!     SpectralComponent::new(1, 1.0, 0.0),
//!     SpectralComponent::new(3, 1.0 / 3.0, 0.0),
//! ];
//! let wave = synthesize(&components, 64);
//! assert_eq!(wave.len(), 64);
//! ```

pub mod error;
pub use error::{Error, Result};

mod additive;
pub use additive::{synthesize, Synthesizer, NOISE_FLOOR};

mod curve;
pub use curve::{sine_curve_points, waveform_points, CurvePoint, MAX_DISPLAY_AMPLITUDE};

mod voicing;
pub use voicing::{
    Oscillator, OscillatorBank, GAIN_SCALE, MASTER_GAIN, MIN_AUDIBLE_AMPLITUDE,
};
