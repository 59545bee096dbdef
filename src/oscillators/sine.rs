//! Sine wave oscillator implementation.

use super::{Oscillator, angle};
use crate::Signal;

/// A sine wave oscillator: `amplitude · sin(2π·f·t + φ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineOscillator {
    /// Frequency in Hz
    frequency: f64,
    /// Peak amplitude
    amplitude: f64,
    /// Phase offset in radians
    phase: f64,
}

impl SineOscillator {
    /// Creates a new sine oscillator with unit amplitude and zero phase.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sine wave in Hz
    ///
    /// # Examples
    ///
    /// ```
    /// use scopesim::{Oscillator, SineOscillator};
    ///
    /// // A 440 Hz (A4 note) oscillator with a 2 V peak
    /// let osc = SineOscillator::new(440.0).with_amplitude(2.0);
    /// assert_eq!(osc.value_at(0.0), 0.0);
    /// ```
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

    /// Sets the phase offset in radians.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }
}

impl Oscillator for SineOscillator {
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
        self.amplitude * angle(self.frequency, self.phase, t).sin()
    }
}

impl Signal for SineOscillator {
    fn sample_at(&mut self, t: f64) -> f64 {
        self.value_at(t)
    }
}
