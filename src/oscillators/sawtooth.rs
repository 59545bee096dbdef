//! Sawtooth wave oscillator implementation.

use super::Oscillator;
use crate::Signal;

/// A sawtooth wave oscillator for the scope.
///
/// Computes `amplitude · 2 · (f·t − floor(0.5 + f·t))`: a linear ramp from
/// `-amplitude` to just below `+amplitude` each period, centred so that it
/// crosses zero at `t = 0`.
///
/// The phase offset is stored and reported but does not shift the ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SawtoothOscillator {
    frequency: f64,
    amplitude: f64,
    phase: f64,
}

impl SawtoothOscillator {
    /// Creates a new sawtooth oscillator with unit amplitude and zero phase.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sawtooth wave in Hz
    pub fn new(frequency: f64) -> Self {
        Self {
            frequency,
            amplitude: 1.0,
            phase: 0.0,
        }
    }

    /// Sets the peak amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Sets the phase offset. Recorded only; see the type docs.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }
}

impl Oscillator for SawtoothOscillator {
    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn amplitude(&self) -> f64 {
        self.amplitude
    }

    fn phase(&self) -> f64 {
        self.phase
    }

    fn value_at(&self, t: f64) -> f64 {
        let cycles = self.frequency * t;
        self.amplitude * 2.0 * (cycles - (0.5 + cycles).floor())
    }
}

impl Signal for SawtoothOscillator {
    fn sample_at(&mut self, t: f64) -> f64 {
        self.value_at(t)
    }
}
