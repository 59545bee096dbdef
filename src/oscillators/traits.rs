//! Core trait definitions for oscillators.

use std::f64::consts::TAU;

/// Oscillators are periodic, deterministic functions of time.
///
/// Every oscillator is described by a frequency (Hz), a peak amplitude and a
/// phase offset (radians). Unlike noise sources, evaluating an oscillator
/// never mutates it, so `value_at` takes `&self`.
pub trait Oscillator {
    /// Frequency in Hz.
    fn frequency(&self) -> f64;

    /// Peak amplitude.
    fn amplitude(&self) -> f64;

    /// Phase offset in radians.
    fn phase(&self) -> f64;

    /// Evaluates the waveform at time `t` (seconds).
    fn value_at(&self, t: f64) -> f64;
}

/// Instantaneous angle `θ(t) = 2π·f·t + φ` shared by the sine-derived waveforms.
pub(crate) fn angle(frequency: f64, phase: f64, t: f64) -> f64 {
    TAU * frequency * t + phase
}
