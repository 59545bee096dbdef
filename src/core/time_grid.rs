//! Uniformly spaced sample instants.

use crate::error::{Result, ScopeError};
use std::ops::Deref;

/// Relative slack used when turning `duration / step` into a sample count,
/// so that e.g. `0.1 / 0.0001` counts as exactly 1000 steps.
const COUNT_TOLERANCE: f64 = 1e-9;

/// Largest grid a single capture may allocate (1 GiB of `f64` instants).
pub const MAX_SAMPLES: usize = 1 << 27;

/// An ordered, strictly increasing sequence of sample instants with a fixed step.
///
/// Instants are computed as `i * step` rather than by accumulation, so the
/// spacing stays uniform across long grids. The grid dereferences to `[f64]`
/// and can be handed directly to anything that takes a time slice.
///
/// # Examples
///
/// ```
/// use scopesim::TimeGrid;
///
/// // 0.1 s of signal at 10 kHz
/// let grid = TimeGrid::from_duration(0.1, 1e-4).unwrap();
/// assert_eq!(grid.len(), 1000);
/// assert_eq!(grid.sample_rate(), 10_000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    instants: Vec<f64>,
    step: f64,
}

impl TimeGrid {
    /// Creates a grid of `len` instants starting at 0 with spacing `step`.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::InvalidStep` if `step` is not positive and finite,
    /// and `ScopeError::TooManySamples` if `len` exceeds [`MAX_SAMPLES`].
    pub fn with_len(len: usize, step: f64) -> Result<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(ScopeError::InvalidStep(step));
        }
        if len > MAX_SAMPLES {
            return Err(ScopeError::TooManySamples {
                requested: len as f64,
                max: MAX_SAMPLES,
            });
        }
        let instants = (0..len).map(|i| i as f64 * step).collect();
        Ok(Self { instants, step })
    }

    /// Creates the half-open grid `[0, duration)` with spacing `step`.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::InvalidStep` for a non-positive step and
    /// `ScopeError::InvalidDuration` for a negative or non-finite duration.
    /// A span needing more than [`MAX_SAMPLES`] instants, including one whose
    /// sample count overflows, gives `ScopeError::TooManySamples`.
    pub fn from_duration(duration: f64, step: f64) -> Result<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(ScopeError::InvalidStep(step));
        }
        if !(duration.is_finite() && duration >= 0.0) {
            return Err(ScopeError::InvalidDuration(duration));
        }

        let steps = duration / step;
        if !steps.is_finite() || steps > MAX_SAMPLES as f64 {
            return Err(ScopeError::TooManySamples {
                requested: steps,
                max: MAX_SAMPLES,
            });
        }
        let nearest = steps.round();
        let len = if (steps - nearest).abs() <= COUNT_TOLERANCE * nearest.max(1.0) {
            nearest
        } else {
            steps.ceil()
        };

        Self::with_len(len as usize, step)
    }

    /// Spacing between consecutive instants in seconds.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Sample rate matching this grid (reciprocal of the step), in Hz.
    pub fn sample_rate(&self) -> f64 {
        1.0 / self.step
    }

    /// Time span covered by the grid, `len * step`.
    pub fn duration(&self) -> f64 {
        self.instants.len() as f64 * self.step
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.instants
    }
}

impl Deref for TimeGrid {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.instants
    }
}

impl AsRef<[f64]> for TimeGrid {
    fn as_ref(&self) -> &[f64] {
        &self.instants
    }
}
