//! # Prism - Sine-Wave Composition Engine
//!
//! Spectral analysis and additive synthesis for interactive Fourier lessons.
//!
//! ## Architecture
//!
//! Prism is an umbrella crate that coordinates:
//! - **prism-core** - Shared types (components, spectra, component sets), angle helpers, config
//! - **prism-analysis** - Direct DFT, truncated spectrum, drawn-curve sampling
//! - **prism-synth** - Additive synthesis, curve points, oscillator bank voicing
//!
//! The analyzer and the synthesizer never call each other. They meet only
//! in [`SpectralComponent`], which is what lets a caller run the
//! analyze → edit → resynthesize loop through [`PrismEngine`].
//!
//! ## Quick Start
//!
//! ```
//! use prism::prelude::*;
//!
//! let engine = PrismEngine::builder().build()?;
//!
//! // Three-harmonic square-ish wave
//! let components = [
//!     SpectralComponent::new(1, 1.0, 0.0),
//!     SpectralComponent::new(3, 1.0 / 3.0, 0.0),
//!     SpectralComponent::new(5, 1.0 / 5.0, 0.0),
//! ];
//! let wave = engine.synthesize(&components, 64)?;
//!
//! let spectrum = engine.analyze(&wave)?;
//! assert_eq!(spectrum.components.len(), 6);
//! # Ok::<(), prism::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - `full`
//! - `full` - Analysis and synthesis
//! - `analysis` - Spectral analysis subsystem
//! - `synth` - Additive synthesis subsystem
//! - `serialization` - Serde derives on value types and config

/// Re-export of prism-core for direct access
pub use prism_core as core;

// Core types
pub use prism_core::math;
pub use prism_core::{
    ComponentSet, PrismConfig, SpectralComponent, SpectralResult, DEFAULT_BASE_FREQUENCY,
    DEFAULT_MAX_SAMPLES,
};

// Analysis subsystem
#[cfg(feature = "analysis")]
pub use prism_analysis as analysis;

#[cfg(feature = "analysis")]
pub use prism_analysis::{Analyzer, LuminanceField, MAX_COMPONENTS};

// Synthesis subsystem
#[cfg(feature = "synth")]
pub use prism_synth as synth;

#[cfg(feature = "synth")]
pub use prism_synth::{CurvePoint, Oscillator, OscillatorBank, Synthesizer, NOISE_FLOOR};

mod builder;
mod engine;
mod error;

pub use builder::PrismEngineBuilder;
pub use engine::PrismEngine;
pub use error::{Error, Result};

/// Convenience prelude for common imports
pub mod prelude {
    // Main engine
    pub use crate::{PrismEngine, PrismEngineBuilder};

    // Essential types
    pub use crate::core::{ComponentSet, PrismConfig, SpectralComponent, SpectralResult};

    // Analysis
    #[cfg(feature = "analysis")]
    pub use crate::analysis::{analyze, LuminanceField};

    // Synthesis
    #[cfg(feature = "synth")]
    pub use crate::synth::{synthesize, OscillatorBank};
}
