//! PrismEngine that wires configuration and logging around the transforms

use crate::core::PrismConfig;
use crate::PrismEngineBuilder;

#[cfg(any(feature = "analysis", feature = "synth"))]
use crate::core::{SpectralComponent, SpectralResult};
#[cfg(any(feature = "analysis", feature = "synth"))]
use crate::Result;
#[cfg(any(feature = "analysis", feature = "synth"))]
use tracing::{debug, warn};

#[cfg(feature = "analysis")]
use crate::analysis::LuminanceField;
#[cfg(feature = "analysis")]
use tracing::trace;

#[cfg(feature = "synth")]
use crate::core::ComponentSet;
#[cfg(feature = "synth")]
use crate::synth::OscillatorBank;

/// Entry point for the analyze → edit → resynthesize loop.
///
/// The engine holds only immutable configuration, so it is `Send + Sync`
/// and can be shared behind an `Arc` without locking. Every call is an
/// independent pure computation; the engine adds the sample guard from
/// [`PrismConfig::max_samples`] and `tracing` events around it.
///
/// # Example
///
/// ```
/// use prism::prelude::*;
///
/// let engine = PrismEngine::builder().build()?;
///
/// let wave = engine.synthesize(&[SpectralComponent::new(1, 1.0, 0.0)], 32)?;
/// let spectrum = engine.analyze(&wave)?;
/// assert_eq!(spectrum.dominant().map(|c| c.k), Some(1));
///
/// // Boost the second harmonic and rebuild
/// let edited = engine.resynthesize(&spectrum, [SpectralComponent::new(2, 0.5, 0.0)], 32)?;
/// assert_eq!(edited.len(), 32);
/// # Ok::<(), prism::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PrismEngine {
    config: PrismConfig,
}

impl PrismEngine {
    pub fn builder() -> PrismEngineBuilder {
        PrismEngineBuilder::default()
    }

    pub(crate) fn from_config(config: PrismConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrismConfig {
        &self.config
    }

    /// Analyze a sampled waveform into its first six components.
    #[cfg(feature = "analysis")]
    pub fn analyze(&self, samples: &[f64]) -> Result<SpectralResult> {
        self.guard(samples.len(), "analyze")?;

        let result = crate::analysis::analyze(samples);
        debug!(
            samples = samples.len(),
            components = result.len(),
            energy = result.energy,
            "Analyzed waveform"
        );
        if self.config.debug_spectral_analysis {
            self.trace_components(&result.components);
        }
        Ok(result)
    }

    /// Sample a drawn curve and analyze it.
    #[cfg(feature = "analysis")]
    pub fn analyze_field(&self, field: &LuminanceField) -> Result<SpectralResult> {
        debug!(
            width = field.width(),
            height = field.height(),
            "Sampling luminance field"
        );
        self.analyze(&field.sample_columns())
    }

    /// Exact energy over all N bins of `samples`.
    #[cfg(feature = "analysis")]
    pub fn full_spectrum_energy(&self, samples: &[f64]) -> Result<f64> {
        self.guard(samples.len(), "full_spectrum_energy")?;
        Ok(crate::analysis::full_spectrum_energy(samples))
    }

    /// Synthesize `num_points` samples over one period.
    #[cfg(feature = "synth")]
    pub fn synthesize(
        &self,
        components: &[SpectralComponent],
        num_points: usize,
    ) -> Result<Vec<f64>> {
        self.guard(num_points, "synthesize")?;

        let wave = crate::synth::synthesize(components, num_points);
        debug!(
            components = components.len(),
            points = num_points,
            "Synthesized waveform"
        );
        Ok(wave)
    }

    /// Apply `edits` on top of an analysis result and synthesize the outcome.
    ///
    /// Edits are merged per harmonic index, the last edit for a given `k`
    /// winning, so the synthesizer never sees duplicates from this path.
    #[cfg(feature = "synth")]
    pub fn resynthesize<I>(
        &self,
        result: &SpectralResult,
        edits: I,
        num_points: usize,
    ) -> Result<Vec<f64>>
    where
        I: IntoIterator<Item = SpectralComponent>,
    {
        let mut set: ComponentSet = result.components.iter().copied().collect();
        set.extend(edits);
        debug!(
            analyzed = result.len(),
            merged = set.len(),
            "Merged component edits"
        );
        self.synthesize(set.as_slice(), num_points)
    }

    /// Oscillator plan for `components` at the configured base frequency.
    #[cfg(feature = "synth")]
    pub fn oscillator_bank(&self, components: &[SpectralComponent]) -> OscillatorBank {
        let bank = OscillatorBank::from_components(components, self.config.base_frequency);
        debug!(
            oscillators = bank.len(),
            base_frequency = self.config.base_frequency,
            "Built oscillator bank"
        );
        bank
    }

    /// Render `num_frames` of the oscillator bank at the configured sample rate.
    #[cfg(feature = "synth")]
    pub fn render_bank(
        &self,
        components: &[SpectralComponent],
        num_frames: usize,
    ) -> Result<Vec<f32>> {
        let bank = self.oscillator_bank(components);
        Ok(bank.render(self.config.sample_rate, num_frames)?)
    }

    #[cfg(any(feature = "analysis", feature = "synth"))]
    fn guard(&self, len: usize, operation: &'static str) -> Result<()> {
        if let Err(e) = self.config.check_len(len) {
            warn!(
                operation,
                len,
                max = self.config.max_samples,
                "Rejected oversized request"
            );
            return Err(e.into());
        }
        Ok(())
    }

    #[cfg(feature = "analysis")]
    fn trace_components(&self, components: &[SpectralComponent]) {
        for c in components {
            trace!(
                k = c.k,
                amplitude = c.amplitude,
                phase = c.phase,
                "Spectral component"
            );
        }
    }
}
