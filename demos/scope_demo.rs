//! Captures one screen of a waveform and prints the trace and its spectrum.
//!
//! Usage: cargo run --example scope_demo -- [WAVE] [FREQUENCY_HZ]
//!
//! WAVE is one of Sine, Square, Triangle, Sawtooth, Random or Superposition.
//! Set RUST_LOG=debug to see the pipeline logs.

use anyhow::{Context, Result};
use rand::SeedableRng;
use scopesim::{ScopeSettings, SignalSource, capture};

const ROWS: usize = 21;
const COLUMNS: usize = 100;

fn draw_trace(samples: &[f64], vertical_range: (f64, f64)) {
    let (low, high) = vertical_range;
    let mut screen = vec![vec![' '; COLUMNS]; ROWS];
    screen[ROWS / 2].fill('-');

    let stride = (samples.len() / COLUMNS).max(1);
    for (column, &sample) in samples.iter().step_by(stride).take(COLUMNS).enumerate() {
        let clamped = sample.clamp(low, high);
        let row = ((high - clamped) / (high - low) * (ROWS - 1) as f64).round() as usize;
        screen[row][column] = '*';
    }

    for row in screen {
        println!("|{}|", row.into_iter().collect::<String>());
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let wave = args.next().unwrap_or_else(|| "Sine".to_string());
    let frequency: f64 = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid frequency: {arg}"))?,
        None => 440.0,
    };

    // Zoom the vertical axis so a 1 V signal spans most of the screen
    let settings = ScopeSettings::default()
        .with_volts_per_div(0.15)
        .with_time_per_div(0.001);
    let source = SignalSource::from_selection(&wave, frequency, 1.0, 0.0);

    let mut rng = rand::rngs::StdRng::from_entropy();
    let capture = capture(&settings, &source, &mut rng)?;

    println!("{}", capture.title);
    println!(
        "{} samples at {} Hz, {} V/div, {} s/div",
        capture.samples.len(),
        capture.time_grid.sample_rate(),
        settings.volts_per_div,
        settings.time_per_div
    );
    draw_trace(&capture.samples, settings.vertical_range());

    let spectrum = &capture.spectrum;
    let db = spectrum.magnitude_db();
    let degrees = spectrum.phase_degrees();
    let mut bins: Vec<usize> = (0..spectrum.len()).collect();
    bins.sort_by(|&a, &b| spectrum.magnitude[b].total_cmp(&spectrum.magnitude[a]));

    println!();
    println!(
        "{:>10}  {:>10}  {:>10}  {:>10}",
        "Hz", "magnitude", "dB", "phase deg"
    );
    for &bin in bins.iter().take(5) {
        println!(
            "{:>10.1}  {:>10.4}  {:>10.2}  {:>10.1}",
            spectrum.frequencies[bin], spectrum.magnitude[bin], db[bin], degrees[bin]
        );
    }

    Ok(())
}
