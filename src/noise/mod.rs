//! Noise sources for the scope.
//!
//! This module contains the stochastic waveform family.

mod white;

pub use white::WhiteNoise;
