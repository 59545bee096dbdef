//! Square wave oscillator implementation.

use super::{Oscillator, angle};
use crate::Signal;

/// A square wave oscillator: `amplitude · sign(sin(2π·f·t + φ))`.
///
/// The wave sits at `+amplitude` while the underlying sine is positive and at
/// `-amplitude` while it is negative. Where the sine is exactly zero the
/// output is 0, so a trace starting at `t = 0` with zero phase begins on the
/// axis rather than on a rail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareOscillator {
    frequency: f64,
    amplitude: f64,
    phase: f64,
}

impl SquareOscillator {
    /// Creates a new square oscillator with unit amplitude and zero phase.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the square wave in Hz
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

/// Three-valued sign: zero stays zero.
fn sign(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x.signum() }
}

impl Oscillator for SquareOscillator {
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
        self.amplitude * sign(angle(self.frequency, self.phase, t).sin())
    }
}

impl Signal for SquareOscillator {
    fn sample_at(&mut self, t: f64) -> f64 {
        self.value_at(t)
    }
}
