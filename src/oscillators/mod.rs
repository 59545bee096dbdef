//! Oscillator implementations for the deterministic waveform families.
//!
//! This module contains the core `Oscillator` trait and one oscillator per waveform.

mod sawtooth;
mod sine;
mod square;
mod traits;
mod triangle;

pub use sawtooth::SawtoothOscillator;
pub use sine::SineOscillator;
pub use square::SquareOscillator;
pub use traits::Oscillator;
pub use triangle::TriangleOscillator;

pub(crate) use traits::angle;
