//! # Prism Analysis
//!
//! Spectral analysis of short periodic waveforms.
//!
//! This crate provides:
//! - **Direct DFT**: explicit cosine/sine sums, O(N²), no FFT shortcuts
//! - **Truncated spectrum**: the first six harmonics as editable components
//! - **Energy**: truncated-spectrum energy plus an exact full-spectrum figure
//! - **Curve sampling**: read a hand-drawn curve out of a luminance image
//!
//! All functions operate on plain `&[f64]` sample buffers.
//!
//! ## Example
//!
//! ```rust
//! use prism_analysis::{analyze, full_spectrum_energy};
//!
//! let samples: Vec<f64> = (0..32)
//!     .map(|n| (2.0 * std::f64::consts::PI * n as f64 / 32.0).sin())
//!     .collect();
//!
//! let result = analyze(&samples);
//! assert_eq!(result.components.len(), 6);
//! assert_eq!(result.dominant().map(|c| c.k), Some(1));
//!
//! // Truncated energy never exceeds the full Parseval total
//! assert!(result.energy <= full_spectrum_energy(&samples) + 1e-12);
//! ```

pub mod canvas;
pub mod dft;
pub mod spectrum;

mod error;
pub use error::{Error, Result};

pub use canvas::{LuminanceField, BACKGROUND_LUMINANCE};
pub use dft::{dft, dft_bins, full_spectrum_energy};
pub use spectrum::{analyze, Analyzer, MAX_COMPONENTS};

