//! Builder for configuring and constructing a `PrismEngine`.

use crate::core::PrismConfig;
use crate::{PrismEngine, Result};

/// Fluent configuration for [`PrismEngine`].
///
/// Every setter overrides one field of [`PrismConfig`]; `build()` validates
/// the result.
///
/// # Example
///
/// ```
/// use prism::PrismEngine;
///
/// let engine = PrismEngine::builder()
///     .max_samples(1024)
///     .base_frequency(220.0)
///     .build()?;
///
/// assert_eq!(engine.config().max_samples, 1024);
/// # Ok::<(), prism::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrismEngineBuilder {
    config: PrismConfig,
}

impl PrismEngineBuilder {
    /// Start from an existing configuration.
    pub fn from_config(config: PrismConfig) -> Self {
        Self { config }
    }

    /// Default: 4096
    pub fn max_samples(mut self, max_samples: usize) -> Self {
        self.config.max_samples = max_samples;
        self
    }

    /// Default: 174.61 Hz (F3)
    pub fn base_frequency(mut self, hz: f64) -> Self {
        self.config.base_frequency = hz;
        self
    }

    /// Default: 44100 Hz
    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.config.sample_rate = sample_rate;
        self
    }

    /// Trace every analyzed component at `TRACE` level.
    pub fn debug_spectral_analysis(mut self, enabled: bool) -> Self {
        self.config.debug_spectral_analysis = enabled;
        self
    }

    pub fn build(self) -> Result<PrismEngine> {
        self.config.validate()?;
        tracing::debug!(
            max_samples = self.config.max_samples,
            base_frequency = self.config.base_frequency,
            sample_rate = self.config.sample_rate,
            "Built Prism engine"
        );
        Ok(PrismEngine::from_config(self.config))
    }
}
