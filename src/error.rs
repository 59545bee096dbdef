//! Error type shared by the generator, the analyzer and the scope layer.

use thiserror::Error;

/// Precondition violations rejected before any computation happens.
///
/// An unrecognised waveform kind is deliberately absent: it degrades to a
/// silent trace instead of failing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScopeError {
    #[error("frequency must be a positive, finite number of hertz (got {0})")]
    NonPositiveFrequency(f64),

    #[error("sample rate must be a positive, finite number of hertz (got {0})")]
    NonPositiveSampleRate(f64),

    #[error("spectral analysis needs at least 2 samples (got {len})")]
    DegenerateSignal { len: usize },

    #[error("sample step must be a positive, finite number of seconds (got {0})")]
    InvalidStep(f64),

    #[error("duration must be a non-negative, finite number of seconds (got {0})")]
    InvalidDuration(f64),

    #[error("a grid of {requested} samples exceeds the limit of {max}")]
    TooManySamples { requested: f64, max: usize },

    #[error("cannot combine sequences of different lengths ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("invalid scope setting `{name}`: {value}")]
    InvalidSetting { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, ScopeError>;
