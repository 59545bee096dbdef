//! Scopesim - an oscilloscope and spectrum analyzer simulation for Rust
//!
//! This library synthesises test signals over a uniform time grid and
//! decomposes them into one-sided magnitude and phase spectra:
//! - Oscillators for the deterministic waveforms (sine, square, triangle, sawtooth)
//! - White noise drawn from an injected random number generator
//! - Superposition of independently generated waveforms
//! - FFT-based spectral analysis
//! - Oscilloscope settings (volts/div, time/div) and a one-shot capture pipeline

pub mod analysis;
pub mod combinators;
pub mod core;
pub mod error;
pub mod generator;
pub mod noise;
pub mod oscillators;
pub mod scope;

// Re-export commonly used types at the crate root
pub use analysis::{Spectrum, analyze};
pub use combinators::{Superposition, superpose};
pub use crate::core::{Signal, TimeGrid};
pub use error::{Result, ScopeError};
pub use generator::{WaveKind, Waveform, generate};
pub use noise::WhiteNoise;
pub use oscillators::{
    Oscillator, SawtoothOscillator, SineOscillator, SquareOscillator, TriangleOscillator,
};
pub use scope::{Capture, ScopeSettings, SignalSource, capture};
