//! Oscillator bank: components mapped onto sine oscillators for playback.
//!
//! Each non-DC component above [`MIN_AUDIBLE_AMPLITUDE`] becomes one sine
//! oscillator at `base_frequency · (k + 1)` with gain
//! `amplitude · GAIN_SCALE`, all summed through [`MASTER_GAIN`]. The bank is
//! a plan: a playback layer feeds it to real oscillators, and
//! [`OscillatorBank::render`] produces the same mix offline.

use crate::{Error, Result};
use prism_core::SpectralComponent;
use std::f64::consts::TAU;

/// Components quieter than this get no oscillator.
pub const MIN_AUDIBLE_AMPLITUDE: f64 = 0.01;

/// Per-oscillator gain per unit of amplitude.
pub const GAIN_SCALE: f64 = 0.05;

/// Gain applied to the summed oscillators.
pub const MASTER_GAIN: f64 = 0.1;

/// One sine oscillator of the bank.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Oscillator {
    /// Harmonic index it was built from
    pub k: usize,
    /// Frequency in Hz
    pub frequency: f64,
    /// Linear gain before the master stage
    pub gain: f64,
}

/// Set of sine oscillators derived from spectral components.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct OscillatorBank {
    oscillators: Vec<Oscillator>,
    master_gain: f64,
}

impl OscillatorBank {
    /// Build a bank from components, in the order given.
    ///
    /// DC has no pitch and is skipped, as is anything below
    /// [`MIN_AUDIBLE_AMPLITUDE`].
    pub fn from_components(components: &[SpectralComponent], base_frequency: f64) -> Self {
        let oscillators = components
            .iter()
            .filter(|c| !c.is_dc() && c.amplitude >= MIN_AUDIBLE_AMPLITUDE)
            .map(|c| Oscillator {
                k: c.k,
                frequency: base_frequency * (c.k + 1) as f64,
                gain: c.amplitude * GAIN_SCALE,
            })
            .collect();

        Self {
            oscillators,
            master_gain: MASTER_GAIN,
        }
    }

    pub fn oscillators(&self) -> &[Oscillator] {
        &self.oscillators
    }

    pub fn master_gain(&self) -> f64 {
        self.master_gain
    }

    pub fn len(&self) -> usize {
        self.oscillators.len()
    }

    /// True when nothing would sound.
    pub fn is_empty(&self) -> bool {
        self.oscillators.is_empty()
    }

    /// Render `num_frames` mono frames of the bank, every oscillator
    /// starting at phase 0.
    pub fn render(&self, sample_rate: f64, num_frames: usize) -> Result<Vec<f32>> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "sample_rate {} must be positive",
                sample_rate
            )));
        }

        let mut output = vec![0.0f32; num_frames];
        for osc in &self.oscillators {
            let increment = osc.frequency / sample_rate;
            let gain = osc.gain * self.master_gain;
            let mut phase = 0.0f64;
            for frame in output.iter_mut() {
                *frame += (gain * (phase * TAU).sin()) as f32;
                phase += increment;
                phase -= phase.floor();
            }
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const BASE: f64 = 174.61;

    #[test]
    fn test_frequency_and_gain_mapping() {
        let bank = OscillatorBank::from_components(
            &[
                SpectralComponent::new(1, 1.0, 0.0),
                SpectralComponent::new(3, 0.4, 45.0),
            ],
            BASE,
        );
        assert_eq!(bank.len(), 2);
        let osc = bank.oscillators();
        assert_abs_diff_eq!(osc[0].frequency, BASE * 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(osc[0].gain, 0.05, epsilon = 1e-12);
        assert_abs_diff_eq!(osc[1].frequency, BASE * 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(osc[1].gain, 0.02, epsilon = 1e-12);
        assert_eq!(bank.master_gain(), MASTER_GAIN);
    }

    #[test]
    fn test_skips_dc_and_quiet_components() {
        let bank = OscillatorBank::from_components(
            &[
                SpectralComponent::dc(1.0),
                SpectralComponent::new(1, 0.009, 0.0),
                SpectralComponent::new(2, MIN_AUDIBLE_AMPLITUDE, 0.0),
            ],
            BASE,
        );
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.oscillators()[0].k, 2);
    }

    #[test]
    fn test_empty_bank_renders_silence() {
        let bank = OscillatorBank::from_components(&[], BASE);
        assert!(bank.is_empty());
        let frames = bank.render(44100.0, 64).unwrap();
        assert!(frames.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_render_peak_matches_gain() {
        let bank = OscillatorBank::from_components(&[SpectralComponent::new(1, 1.0, 0.0)], 100.0);
        // 200 Hz at 48 kHz: one period every 240 frames
        let frames = bank.render(48000.0, 480).unwrap();
        let peak = frames.iter().fold(0.0f32, |a, &s| a.max(s.abs()));
        assert_abs_diff_eq!(peak, (GAIN_SCALE * MASTER_GAIN) as f32, epsilon = 1e-5);
        assert_abs_diff_eq!(frames[0], 0.0);
        assert_abs_diff_eq!(frames[60], (GAIN_SCALE * MASTER_GAIN) as f32, epsilon = 1e-6);
    }

    #[test]
    fn test_render_rejects_bad_sample_rate() {
        let bank = OscillatorBank::from_components(&[SpectralComponent::new(1, 1.0, 0.0)], BASE);
        assert!(bank.render(0.0, 16).is_err());
        assert!(bank.render(f64::NAN, 16).is_err());
    }
}
