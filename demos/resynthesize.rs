//! # Resynthesize
//!
//! Draw a square-ish wave, read it back through the analyzer, boost the
//! third harmonic, and resynthesize.
//!
//! **Concepts:** Engine setup, drawn-curve analysis, component edits
//!
//! ```bash
//! cargo run --example resynthesize
//! ```

use prism::prelude::*;
use prism::synth::waveform_points;

const WIDTH: usize = 64;
const HEIGHT: usize = 48;

fn main() -> prism::Result<()> {
    tracing_subscriber::fmt::init();

    let engine = PrismEngine::builder().debug_spectral_analysis(true).build()?;

    // Odd harmonics 1, 3, 5 approximate a square wave
    let target = [
        SpectralComponent::new(1, 1.0, 0.0),
        SpectralComponent::new(3, 1.0 / 3.0, 0.0),
        SpectralComponent::new(5, 1.0 / 5.0, 0.0),
    ];
    let wave = engine.synthesize(&target, WIDTH)?;

    // Rasterize the curve as black pixels on white, one per column
    let mut pixels = vec![255u8; WIDTH * HEIGHT];
    for (col, point) in waveform_points(&wave, WIDTH, HEIGHT).iter().enumerate() {
        let row = (point.y.round() as usize).min(HEIGHT - 1);
        pixels[row * WIDTH + col] = 0;
    }
    let field = LuminanceField::from_gray8(WIDTH, HEIGHT, &pixels)?;

    let spectrum = engine.analyze_field(&field)?;
    println!("Drawn curve, energy {:.4}:", spectrum.energy);
    for c in &spectrum.components {
        println!(
            "  k={}  amplitude {:.3}  phase {:7.2}°",
            c.k,
            c.peak_amplitude(),
            c.normalized_phase()
        );
    }

    // Back to sine reference, then double the third harmonic
    let mut partials: ComponentSet = spectrum.to_partials().into_iter().collect();
    if let Some(third) = partials.get(3).copied() {
        partials.set_amplitude(3, third.amplitude * 2.0);
    }

    let edited = engine.synthesize(partials.as_slice(), WIDTH)?;
    let peak = edited.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    println!("Resynthesized {} points, peak {:.3}", edited.len(), peak);

    let bank = engine.oscillator_bank(partials.as_slice());
    for osc in bank.oscillators() {
        println!("  osc k={}  {:.2} Hz  gain {:.4}", osc.k, osc.frequency, osc.gain);
    }
    let frames = engine.render_bank(partials.as_slice(), 1024)?;
    println!("Rendered {} frames of audio", frames.len());

    Ok(())
}
