//! # Prism Core
//!
//! Shared building blocks for the Prism sine-wave engine:
//!
//! - **[`SpectralComponent`]** - one `(k, amplitude, phase)` harmonic
//! - **[`SpectralResult`]** - truncated spectrum plus its energy
//! - **[`ComponentSet`]** - editable components keyed by harmonic index
//! - **[`PrismConfig`]** - engine configuration
//! - **[`math`]** - degree/radian conversion and sine evaluation
//!
//! Analysis and synthesis live in `prism-analysis` and `prism-synth`; both
//! speak only in the types defined here.

pub mod error;
pub use error::{Error, Result};

pub mod math;

mod component;
pub use component::{ComponentSet, SpectralComponent, SpectralResult};

mod config;
pub use config::{PrismConfig, DEFAULT_BASE_FREQUENCY, DEFAULT_MAX_SAMPLES};
