//! Spectral analysis of sampled signals.
//!
//! This module turns a uniformly sampled signal into its one-sided spectrum:
//! - **Frequency axis** - bin `k` sits at `k · sample_rate / N`
//! - **Magnitude** - `|X[k]| · 2 / N`, so a pure sinusoid reads at its amplitude
//! - **Phase** - `arg(X[k])` in (−π, π]
//!
//! Only the first `⌊N/2⌋` bins are kept. No window is applied and nothing is
//! zero-padded: the transform length is the signal length.
//!
//! # Example
//!
//! ```
//! use scopesim::analyze;
//! use std::f64::consts::PI;
//!
//! // 1000 samples of a 440 Hz sine at 10 kHz
//! let signal: Vec<f64> = (0..1000)
//!     .map(|i| (2.0 * PI * 440.0 * i as f64 / 10_000.0).sin())
//!     .collect();
//!
//! let spectrum = analyze(&signal, 10_000.0).unwrap();
//! assert_eq!(spectrum.len(), 500);
//! assert_eq!(spectrum.peak_frequency(), Some(440.0));
//! ```

mod fft;
mod spectrum;

pub use fft::analyze;
pub use spectrum::Spectrum;
