//! Direct Discrete Fourier Transform
//!
//! Computes `X[k] = (1/N) Σ x[n]·e^(-i·2π·k·n/N)` by explicit cosine and sine
//! sums.
//!
//! ## Cost
//!
//! Each bin is O(N), so the full transform is O(N²). That is deliberate: the
//! waveforms analyzed here are tens of samples long, and the direct sums give
//! bit-for-bit reproducible output. Callers handling untrusted lengths should
//! bound N themselves (the engine does via `PrismConfig::max_samples`).

use rustfft::num_complex::Complex;
use std::f64::consts::PI;

/// Full transform of `samples`: one bin per input sample.
///
/// O(N²). Returns an empty vector for empty input.
pub fn dft(samples: &[f64]) -> Vec<Complex<f64>> {
    dft_bins(samples, samples.len())
}

/// The first `count` bins of the transform (capped at `samples.len()`).
///
/// Each bin is identical to the corresponding entry of [`dft`]; only the
/// bins that are asked for get computed, so this is O(N·count).
pub fn dft_bins(samples: &[f64], count: usize) -> Vec<Complex<f64>> {
    let count = count.min(samples.len());
    (0..count).map(|k| dft_bin(samples, k)).collect()
}

/// Single bin `k` of the 1/N-scaled transform.
fn dft_bin(samples: &[f64], k: usize) -> Complex<f64> {
    let n = samples.len() as f64;
    let mut real = 0.0;
    let mut imag = 0.0;

    for (i, &x) in samples.iter().enumerate() {
        let angle = (-2.0 * PI * k as f64 * i as f64) / n;
        real += x * angle.cos();
        imag += x * angle.sin();
    }

    Complex::new(real / n, imag / n)
}

/// Energy of the complete spectrum, `Σ |X[k]|²` over all N bins.
///
/// With 1/N scaling this equals the mean square of the signal (Parseval).
/// O(N²).
pub fn full_spectrum_energy(samples: &[f64]) -> f64 {
    dft(samples).iter().map(|c| c.norm_sqr()).sum()
}
