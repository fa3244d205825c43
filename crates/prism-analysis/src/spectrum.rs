//! Truncated spectral analysis
//!
//! Turns a sampled waveform into the first few editable harmonics.
//!
//! ## Energy
//!
//! [`SpectralResult::energy`] sums the squared amplitudes of the *returned*
//! components only. For a signal with content above the cutoff this is less
//! than the full-signal energy; use [`full_spectrum_energy`] when the exact
//! Parseval total is needed.
//!
//! [`full_spectrum_energy`]: crate::dft::full_spectrum_energy

use crate::dft::dft_bins;
use prism_core::math::radians_to_degrees;
use prism_core::{SpectralComponent, SpectralResult};
use rustfft::num_complex::Complex;

/// Number of components the analyzer reports (`k = 0..=5`).
pub const MAX_COMPONENTS: usize = 6;

/// Analyze `samples` and return the first `min(6, N)` components.
///
/// Empty input yields an empty result with zero energy.
pub fn analyze(samples: &[f64]) -> SpectralResult {
    Analyzer::new().analyze(samples)
}

/// Spectral analyzer with a configurable component count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "AnalyzerSettings")
)]
pub struct Analyzer {
    max_components: usize,
}

/// Wire form of [`Analyzer`]; loading goes through the clamp.
#[cfg(feature = "serialization")]
#[derive(serde::Deserialize)]
struct AnalyzerSettings {
    max_components: usize,
}

#[cfg(feature = "serialization")]
impl From<AnalyzerSettings> for Analyzer {
    fn from(settings: AnalyzerSettings) -> Self {
        Self::with_max_components(settings.max_components)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer reporting [`MAX_COMPONENTS`] components.
    pub fn new() -> Self {
        Self {
            max_components: MAX_COMPONENTS,
        }
    }

    /// Report at most `max_components` components.
    ///
    /// Values above [`MAX_COMPONENTS`] are clamped to it.
    pub fn with_max_components(max_components: usize) -> Self {
        Self {
            max_components: max_components.min(MAX_COMPONENTS),
        }
    }

    pub fn max_components(&self) -> usize {
        self.max_components
    }

    /// Analyze a waveform.
    ///
    /// Components come back in ascending `k` with raw `atan2` phases in
    /// degrees (range `(-180, 180]`).
    pub fn analyze(&self, samples: &[f64]) -> SpectralResult {
        if samples.is_empty() {
            return SpectralResult::default();
        }

        let components = dft_bins(samples, self.max_components)
            .into_iter()
            .enumerate()
            .map(|(k, bin)| SpectralComponent::new(k, magnitude(bin), phase_degrees(bin)))
            .collect();

        SpectralResult::from_components(components)
    }
}

fn magnitude(c: Complex<f64>) -> f64 {
    (c.re * c.re + c.im * c.im).sqrt()
}

fn phase_degrees(c: Complex<f64>) -> f64 {
    radians_to_degrees(c.im.atan2(c.re))
}
