//! Additive synthesis over one period.
//!
//! Each output sample `x` of `n` sits at `t = (x / n) · 2π` and is the sum
//! of its components:
//!
//! - `amplitude <= NOISE_FLOOR`: skipped entirely
//! - `k == 0`: a flat `amplitude` offset (phase ignored)
//! - otherwise: `amplitude · sin(k·t + phase)`
//!
//! The sum is plain superposition, so duplicate `k` values add.

use prism_core::math::degrees_to_radians;
use prism_core::SpectralComponent;
use std::f64::consts::PI;

/// Components at or below this amplitude contribute nothing.
pub const NOISE_FLOOR: f64 = 0.001;

/// Synthesize `num_points` samples covering one period.
///
/// Returns an empty vector when `num_points == 0`.
pub fn synthesize(components: &[SpectralComponent], num_points: usize) -> Vec<f64> {
    Synthesizer::new().synthesize(components, num_points)
}

/// Additive synthesizer.
///
/// Stateless apart from its noise floor; one instance can serve any number
/// of calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Synthesizer {
    noise_floor: f64,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer {
    pub fn new() -> Self {
        Self {
            noise_floor: NOISE_FLOOR,
        }
    }

    /// Skip components at or below `noise_floor` instead of [`NOISE_FLOOR`].
    ///
    /// Negative floors are raised to 0, so silent components stay silent.
    pub fn with_noise_floor(noise_floor: f64) -> Self {
        Self {
            noise_floor: noise_floor.max(0.0),
        }
    }

    pub fn noise_floor(&self) -> f64 {
        self.noise_floor
    }

    pub fn synthesize(&self, components: &[SpectralComponent], num_points: usize) -> Vec<f64> {
        let mut output = vec![0.0; num_points];
        self.synthesize_into(components, &mut output);
        output
    }

    /// Overwrite `output` with one period sampled at `output.len()` points.
    pub fn synthesize_into(&self, components: &[SpectralComponent], output: &mut [f64]) {
        output.fill(0.0);
        let num_points = output.len() as f64;

        let audible = components
            .iter()
            .filter(|c| c.amplitude > self.noise_floor);

        for component in audible {
            if component.k == 0 {
                for value in output.iter_mut() {
                    *value += component.amplitude;
                }
                continue;
            }

            let k = component.k as f64;
            let phase = degrees_to_radians(component.phase);
            for (x, value) in output.iter_mut().enumerate() {
                let t = (x as f64 / num_points) * 2.0 * PI;
                *value += component.amplitude * (k * t + phase).sin();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn c(k: usize, amplitude: f64, phase: f64) -> SpectralComponent {
        SpectralComponent::new(k, amplitude, phase)
    }

    #[test]
    fn test_zero_points() {
        assert!(synthesize(&[c(1, 1.0, 0.0)], 0).is_empty());
        assert!(synthesize(&[], 0).is_empty());
    }

    #[test]
    fn test_no_components_is_silence() {
        let wave = synthesize(&[], 10);
        assert_eq!(wave, vec![0.0; 10]);
    }

    #[test]
    fn test_dc_only_is_flat() {
        for phase in [0.0, 90.0, 271.0] {
            let wave = synthesize(&[c(0, 1.5, phase)], 8);
            for value in wave {
                assert_abs_diff_eq!(value, 1.5, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_zero_phase_fundamental_shape() {
        let wave = synthesize(&[c(1, 1.0, 0.0)], 8);
        assert_abs_diff_eq!(wave[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wave[2], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wave[4], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wave[6], -1.0, epsilon = 1e-12);
        // Odd symmetry around the start of the period
        assert_abs_diff_eq!(wave[1], -wave[7], epsilon = 1e-12);
    }

    #[test]
    fn test_phase_shift_changes_output() {
        let sine = synthesize(&[c(1, 1.0, 0.0)], 8);
        let cosine = synthesize(&[c(1, 1.0, 90.0)], 8);
        assert!((sine[0] - cosine[0]).abs() > 0.5);
        assert_abs_diff_eq!(cosine[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_harmonics_combine_additively() {
        let fundamental = synthesize(&[c(1, 1.0, 0.0)], 16);
        let second = synthesize(&[c(2, 0.5, 0.0)], 16);
        let combined = synthesize(&[c(1, 1.0, 0.0), c(2, 0.5, 0.0)], 16);
        for i in 0..16 {
            assert_abs_diff_eq!(combined[i], fundamental[i] + second[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_components_below_floor_are_ignored() {
        let without = synthesize(&[c(1, 1.0, 0.0)], 16);
        let with_tiny = synthesize(&[c(1, 1.0, 0.0), c(2, 0.0001, 0.0)], 16);
        assert_eq!(without, with_tiny);

        // Exactly at the floor is still ignored; the DC branch obeys it too
        let at_floor = synthesize(&[c(1, 1.0, 0.0), c(0, NOISE_FLOOR, 0.0)], 16);
        assert_eq!(without, at_floor);
    }

    #[test]
    fn test_just_above_floor_contributes() {
        let wave = synthesize(&[c(0, 0.0011, 0.0)], 4);
        assert_abs_diff_eq!(wave[0], 0.0011, epsilon = 1e-15);
    }

    #[test]
    fn test_duplicate_k_adds() {
        let doubled = synthesize(&[c(1, 0.5, 0.0), c(1, 0.5, 0.0)], 16);
        let single = synthesize(&[c(1, 1.0, 0.0)], 16);
        for i in 0..16 {
            assert_abs_diff_eq!(doubled[i], single[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_nan_amplitude_is_skipped_by_floor() {
        // NaN fails the `> floor` comparison, like any sub-floor amplitude
        let wave = synthesize(&[c(1, f64::NAN, 0.0)], 4);
        assert_eq!(wave, vec![0.0; 4]);
    }

    #[test]
    fn test_nan_phase_propagates() {
        let wave = synthesize(&[c(1, 1.0, f64::NAN)], 4);
        assert!(wave.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_synthesize_into_overwrites() {
        let mut buffer = vec![9.0; 8];
        Synthesizer::new().synthesize_into(&[c(0, 0.25, 0.0)], &mut buffer);
        assert!(buffer.iter().all(|&v| (v - 0.25).abs() < 1e-12));
    }

    fn component_strategy(ks: std::ops::Range<usize>) -> impl Strategy<Value = SpectralComponent> {
        (ks, 0.0f64..2.0, 0.0f64..360.0).prop_map(|(k, a, p)| SpectralComponent::new(k, a, p))
    }

    proptest! {
        #[test]
        fn prop_zero_law(n in 0usize..128) {
            let wave = synthesize(&[], n);
            prop_assert_eq!(wave.len(), n);
            prop_assert!(wave.iter().all(|&v| v == 0.0));
        }

        #[test]
        fn prop_linearity(
            a in prop::collection::vec(component_strategy(0..4), 0..4),
            b in prop::collection::vec(component_strategy(4..8), 0..4),
            n in 1usize..64,
        ) {
            let union: Vec<SpectralComponent> = a.iter().chain(b.iter()).copied().collect();
            let wa = synthesize(&a, n);
            let wb = synthesize(&b, n);
            let wu = synthesize(&union, n);
            for i in 0..n {
                prop_assert!((wu[i] - (wa[i] + wb[i])).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_noise_floor(
            set in prop::collection::vec(component_strategy(0..6), 0..6),
            k in 0usize..6,
            tiny in 0.0f64..=NOISE_FLOOR,
            phase in 0.0f64..360.0,
            n in 1usize..64,
        ) {
            let mut with_tiny = set.clone();
            with_tiny.push(SpectralComponent::new(k, tiny, phase));
            let base = synthesize(&set, n);
            let extra = synthesize(&with_tiny, n);
            for i in 0..n {
                prop_assert!((base[i] - extra[i]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_custom_noise_floor() {
        let quiet = [c(1, 0.05, 0.0)];
        assert!(Synthesizer::new().synthesize(&quiet, 8).iter().any(|&v| v != 0.0));

        let gated = Synthesizer::with_noise_floor(0.1);
        assert_eq!(gated.noise_floor(), 0.1);
        assert_eq!(gated.synthesize(&quiet, 8), vec![0.0; 8]);

        // Zero-amplitude components never sound, whatever the floor
        let open = Synthesizer::with_noise_floor(-1.0);
        assert_eq!(open.noise_floor(), 0.0);
        assert_eq!(open.synthesize(&[c(0, 0.0, 0.0)], 4), vec![0.0; 4]);
    }
}
