//! White noise generator implementation.

use crate::Signal;
use rand::Rng;

/// A white noise generator.
///
/// Each sample is drawn independently and uniformly from `[-1.0, 1.0)` and
/// scaled by the amplitude. The time instant is ignored; only the number of
/// instants matters.
///
/// The random number generator is owned by the caller's choice of `R`: pass a
/// seeded `StdRng` (or `&mut` to one) for reproducible traces.
pub struct WhiteNoise<R: Rng = rand::rngs::ThreadRng> {
    /// Peak amplitude
    amplitude: f64,
    /// Random number generator
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Creates a new white noise generator with the default ThreadRng.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Peak amplitude of the noise
    ///
    /// # Examples
    ///
    /// ```
    /// use scopesim::{Signal, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::new(1.0);
    /// let sample = noise.sample_at(0.0);
    /// assert!((-1.0..1.0).contains(&sample));
    /// ```
    pub fn new(amplitude: f64) -> Self {
        Self {
            amplitude,
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a new white noise generator with a custom RNG.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Peak amplitude of the noise
    /// * `rng` - Random number generator to draw from
    ///
    /// # Examples
    ///
    /// ```
    /// use scopesim::{Signal, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(0.5, rng);
    /// let samples = noise.render(&[0.0, 1e-4, 2e-4]);
    /// assert_eq!(samples.len(), 3);
    /// ```
    pub fn with_rng(amplitude: f64, rng: R) -> Self {
        Self { amplitude, rng }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn sample_at(&mut self, _t: f64) -> f64 {
        self.amplitude * self.rng.gen_range(-1.0..1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_creation() {
        let noise = WhiteNoise::new(2.0);
        assert_eq!(noise.amplitude(), 2.0);
    }

    #[test]
    fn test_sample_range() {
        let mut noise = WhiteNoise::with_rng(3.0, StdRng::seed_from_u64(7));
        for _ in 0..10_000 {
            let sample = noise.sample_at(0.0);
            assert!((-3.0..=3.0).contains(&sample));
        }
    }

    #[test]
    fn test_randomness() {
        let mut noise = WhiteNoise::new(1.0);
        let samples: Vec<f64> = (0..100).map(|_| noise.sample_at(0.0)).collect();
        let first = samples[0];
        let all_same = samples.iter().all(|&s| s == first);
        assert!(!all_same, "White noise should produce varying samples");
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let grid: Vec<f64> = (0..256).map(|i| i as f64 * 1e-4).collect();
        let a = WhiteNoise::with_rng(1.0, StdRng::seed_from_u64(42)).render(&grid);
        let b = WhiteNoise::with_rng(1.0, StdRng::seed_from_u64(42)).render(&grid);
        let c = WhiteNoise::with_rng(1.0, StdRng::seed_from_u64(43)).render(&grid);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_borrowed_rng_advances() {
        let mut rng = StdRng::seed_from_u64(1);
        let first = WhiteNoise::with_rng(1.0, &mut rng).render(&[0.0; 16]);
        let second = WhiteNoise::with_rng(1.0, &mut rng).render(&[0.0; 16]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_zero_amplitude_is_silent() {
        let mut noise = WhiteNoise::with_rng(0.0, StdRng::seed_from_u64(3));
        assert!(noise.render(&[0.0; 64]).iter().all(|&s| s == 0.0));
    }
}
