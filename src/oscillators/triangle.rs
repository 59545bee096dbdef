//! Triangle wave oscillator implementation.

use super::{Oscillator, angle};
use crate::Signal;
use std::f64::consts::FRAC_2_PI;

/// A triangle wave oscillator for the scope.
///
/// The waveform is derived from the sine of the same frequency and phase:
/// `amplitude · (2/π) · arcsin(sin(2π·f·t + φ))`. It ramps linearly between
/// `-amplitude` and `+amplitude`, crossing zero rising wherever the sine does
/// and peaking wherever the sine peaks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleOscillator {
    frequency: f64,
    amplitude: f64,
    phase: f64,
}

impl TriangleOscillator {
    /// Creates a new triangle oscillator with unit amplitude and zero phase.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the triangle wave in Hz
    ///
    /// # Examples
    ///
    /// ```
    /// use scopesim::{Oscillator, TriangleOscillator};
    ///
    /// let osc = TriangleOscillator::new(1.0);
    /// assert!((osc.value_at(0.25) - 1.0).abs() < 1e-12);
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

impl Oscillator for TriangleOscillator {
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
        // asin folds the sine back onto [-π/2, π/2], which is linear in θ
        self.amplitude * FRAC_2_PI * angle(self.frequency, self.phase, t).sin().asin()
    }
}

impl Signal for TriangleOscillator {
    fn sample_at(&mut self, t: f64) -> f64 {
        self.value_at(t)
    }
}
