//! Engine configuration.

use crate::{Error, Result};

/// Default guard on the number of samples the engine accepts per call.
pub const DEFAULT_MAX_SAMPLES: usize = 4096;

/// F3, the fundamental of the oscillator bank.
pub const DEFAULT_BASE_FREQUENCY: f64 = 174.61;

/// Configuration for the Prism engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PrismConfig {
    /// Largest sample count accepted for analysis or synthesis.
    ///
    /// The full DFT is O(N²), so this bounds the worst-case cost of a call.
    pub max_samples: usize,
    /// Fundamental frequency of the oscillator bank in Hz.
    pub base_frequency: f64,
    /// Sample rate used when rendering the oscillator bank offline.
    pub sample_rate: f64,
    /// Trace every analyzed component.
    pub debug_spectral_analysis: bool,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            max_samples: DEFAULT_MAX_SAMPLES,
            base_frequency: DEFAULT_BASE_FREQUENCY,
            sample_rate: 44100.0,
            debug_spectral_analysis: false,
        }
    }
}

impl PrismConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_samples == 0 {
            return Err(Error::InvalidConfig(
                "max_samples must be at least 1".to_string(),
            ));
        }
        if !self.base_frequency.is_finite() || self.base_frequency <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "base_frequency {} must be a positive frequency",
                self.base_frequency
            )));
        }
        if !(8000.0..=384000.0).contains(&self.sample_rate) {
            return Err(Error::InvalidConfig(format!(
                "sample_rate {} out of range (8000-384000 Hz)",
                self.sample_rate
            )));
        }
        Ok(())
    }

    /// Reject a request of `len` samples above [`max_samples`].
    ///
    /// [`max_samples`]: PrismConfig::max_samples
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len > self.max_samples {
            return Err(Error::TooManySamples {
                len,
                max: self.max_samples,
            });
        }
        Ok(())
    }
}
