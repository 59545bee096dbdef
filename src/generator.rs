//! Waveform generation over a caller-supplied time grid.
//!
//! This is the single-kind path: one descriptor in, one sample sequence out.
//! Combining several descriptors (superposition) lives in
//! [`combinators`](crate::combinators) and is built on top of this module.

use crate::Signal;
use crate::error::{Result, ScopeError};
use crate::noise::WhiteNoise;
use crate::oscillators::{SawtoothOscillator, SineOscillator, SquareOscillator, TriangleOscillator};
use rand::Rng;
use std::fmt;

/// The waveform families the generator knows how to synthesise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaveKind {
    Sine,
    Square,
    Triangle,
    Sawtooth,
    /// Uniform white noise drawn from the injected RNG.
    Random,
    /// A selector value the generator does not recognise.
    ///
    /// Generating it yields an all-zero trace instead of an error, so
    /// unvalidated selector input still produces something to draw.
    Unknown,
}

impl WaveKind {
    /// All kinds that produce a non-trivial trace, in selector order.
    pub const ALL: [WaveKind; 5] = [
        WaveKind::Sine,
        WaveKind::Square,
        WaveKind::Triangle,
        WaveKind::Sawtooth,
        WaveKind::Random,
    ];

    /// Parses a selector label such as `"Sine"` (case-insensitive).
    ///
    /// Anything unrecognised maps to [`WaveKind::Unknown`].
    ///
    /// # Examples
    ///
    /// ```
    /// use scopesim::WaveKind;
    ///
    /// assert_eq!(WaveKind::from_name("triangle"), WaveKind::Triangle);
    /// assert_eq!(WaveKind::from_name("Chirp"), WaveKind::Unknown);
    /// ```
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .unwrap_or(WaveKind::Unknown)
    }

    /// Selector label for this kind.
    pub fn name(self) -> &'static str {
        match self {
            WaveKind::Sine => "Sine",
            WaveKind::Square => "Square",
            WaveKind::Triangle => "Triangle",
            WaveKind::Sawtooth => "Sawtooth",
            WaveKind::Random => "Random",
            WaveKind::Unknown => "Unknown",
        }
    }

    /// True for every kind except [`WaveKind::Random`].
    pub fn is_deterministic(self) -> bool {
        !matches!(self, WaveKind::Random)
    }
}

impl fmt::Display for WaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything needed to synthesise one waveform.
///
/// # Examples
///
/// ```
/// use scopesim::{WaveKind, Waveform};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let wave = Waveform::new(WaveKind::Square, 50.0).with_amplitude(2.0);
/// let samples = wave.generate(&[0.0, 0.005, 0.015], &mut rng).unwrap();
/// assert_eq!(samples, vec![0.0, 2.0, -2.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waveform {
    pub kind: WaveKind,
    /// Frequency in Hz, must be positive.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
    /// Phase offset in radians.
    pub phase: f64,
}

impl Waveform {
    /// Creates a descriptor with unit amplitude and zero phase.
    pub fn new(kind: WaveKind, frequency: f64) -> Self {
        Self {
            kind,
            frequency,
            amplitude: 1.0,
            phase: 0.0,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Synthesises this waveform over `time_grid`.
    ///
    /// See [`generate`] for the contract.
    pub fn generate<R: Rng>(&self, time_grid: &[f64], rng: &mut R) -> Result<Vec<f64>> {
        generate(
            self.kind,
            self.frequency,
            self.amplitude,
            self.phase,
            time_grid,
            rng,
        )
    }
}

/// Synthesises one waveform at every instant of `time_grid`.
///
/// The output has the same length and index alignment as `time_grid`. Only
/// [`WaveKind::Random`] draws from `rng`; every other kind is a pure function
/// of its arguments. [`WaveKind::Unknown`] yields zeros.
///
/// Amplitude and phase are not range-checked.
///
/// # Errors
///
/// Returns `ScopeError::NonPositiveFrequency` if `frequency` is zero,
/// negative or not finite.
pub fn generate<R: Rng>(
    kind: WaveKind,
    frequency: f64,
    amplitude: f64,
    phase: f64,
    time_grid: &[f64],
    rng: &mut R,
) -> Result<Vec<f64>> {
    if !(frequency.is_finite() && frequency > 0.0) {
        return Err(ScopeError::NonPositiveFrequency(frequency));
    }

    log::trace!(
        "generating {} wave: f={} Hz, a={}, phase={} rad over {} samples",
        kind,
        frequency,
        amplitude,
        phase,
        time_grid.len()
    );

    let samples = match kind {
        WaveKind::Sine => SineOscillator::new(frequency)
            .with_amplitude(amplitude)
            .with_phase(phase)
            .render(time_grid),
        WaveKind::Square => SquareOscillator::new(frequency)
            .with_amplitude(amplitude)
            .with_phase(phase)
            .render(time_grid),
        WaveKind::Triangle => TriangleOscillator::new(frequency)
            .with_amplitude(amplitude)
            .with_phase(phase)
            .render(time_grid),
        WaveKind::Sawtooth => SawtoothOscillator::new(frequency)
            .with_amplitude(amplitude)
            .with_phase(phase)
            .render(time_grid),
        WaveKind::Random => WhiteNoise::with_rng(amplitude, &mut *rng).render(time_grid),
        WaveKind::Unknown => {
            log::warn!("unknown waveform kind, generating a flat trace");
            vec![0.0; time_grid.len()]
        }
    };

    Ok(samples)
}
