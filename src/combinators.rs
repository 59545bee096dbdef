//! Combinators for composing waveforms.
//!
//! Superposition is not a waveform kind of its own. It is an explicit
//! composition: each component is generated independently through
//! [`generate`](crate::generate) and the resulting sequences are summed
//! pointwise. Any number of components, of any kinds, can be combined this way.

use crate::error::{Result, ScopeError};
use crate::generator::{WaveKind, Waveform};
use rand::Rng;

/// Sums two sample sequences pointwise.
///
/// # Errors
///
/// Returns `ScopeError::LengthMismatch` if the sequences are not aligned.
///
/// # Examples
///
/// ```
/// use scopesim::superpose;
///
/// let sum = superpose(&[1.0, 2.0], &[0.5, -2.0]).unwrap();
/// assert_eq!(sum, vec![1.5, 0.0]);
/// ```
pub fn superpose(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    if a.len() != b.len() {
        return Err(ScopeError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// A sum of independently generated waveforms.
///
/// # Examples
///
/// ```
/// use scopesim::{Superposition, WaveKind, Waveform};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let base = Waveform::new(WaveKind::Sine, 440.0);
/// let combo = Superposition::harmonic(base, WaveKind::Triangle);
///
/// let second = combo.components()[1];
/// assert_eq!(second.frequency, 880.0);
/// assert_eq!(second.amplitude, 0.5);
///
/// let grid: Vec<f64> = (0..100).map(|i| i as f64 * 1e-4).collect();
/// let samples = combo.generate(&grid, &mut rng).unwrap();
/// assert_eq!(samples.len(), 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Superposition {
    components: Vec<Waveform>,
}

impl Superposition {
    /// Creates a superposition from an explicit list of components.
    pub fn new(components: Vec<Waveform>) -> Self {
        Self { components }
    }

    /// The conventional two-voice pairing: `base` plus a second voice of
    /// `overtone` kind at twice the frequency, half the amplitude and the
    /// same phase.
    pub fn harmonic(base: Waveform, overtone: WaveKind) -> Self {
        let second = Waveform {
            kind: overtone,
            frequency: base.frequency * 2.0,
            amplitude: base.amplitude / 2.0,
            phase: base.phase,
        };
        Self::new(vec![base, second])
    }

    /// Appends another component.
    pub fn with(mut self, component: Waveform) -> Self {
        self.components.push(component);
        self
    }

    pub fn components(&self) -> &[Waveform] {
        &self.components
    }

    /// Generates every component over `time_grid` and sums them.
    ///
    /// An empty superposition is silent: all zeros.
    ///
    /// # Errors
    ///
    /// Propagates the first component's generation error.
    pub fn generate<R: Rng>(&self, time_grid: &[f64], rng: &mut R) -> Result<Vec<f64>> {
        let mut total = vec![0.0; time_grid.len()];
        for component in &self.components {
            let samples = component.generate(time_grid, rng)?;
            total = superpose(&total, &samples)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid(len: usize) -> Vec<f64> {
        (0..len).map(|i| i as f64 * 1e-4).collect()
    }

    #[test]
    fn test_superpose() {
        let sum = superpose(&[1.0, 2.0, 3.0], &[-1.0, 0.5, 0.0]).unwrap();
        assert_eq!(sum, vec![0.0, 2.5, 3.0]);
    }

    #[test]
    fn test_superpose_length_mismatch() {
        assert_eq!(
            superpose(&[1.0, 2.0], &[1.0]),
            Err(ScopeError::LengthMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_harmonic_convention() {
        let base = Waveform::new(WaveKind::Sine, 300.0)
            .with_amplitude(2.0)
            .with_phase(0.5);
        let combo = Superposition::harmonic(base, WaveKind::Square);
        assert_eq!(combo.components().len(), 2);
        assert_eq!(combo.components()[0], base);
        assert_eq!(
            combo.components()[1],
            Waveform {
                kind: WaveKind::Square,
                frequency: 600.0,
                amplitude: 1.0,
                phase: 0.5,
            }
        );
    }

    #[test]
    fn test_equals_pointwise_sum() {
        let mut rng = StdRng::seed_from_u64(0);
        let t = grid(1000);
        let base = Waveform::new(WaveKind::Sine, 440.0).with_amplitude(1.5);
        let combo = Superposition::harmonic(base, WaveKind::Triangle);

        let combined = combo.generate(&t, &mut rng).unwrap();
        let first = combo.components()[0].generate(&t, &mut rng).unwrap();
        let second = combo.components()[1].generate(&t, &mut rng).unwrap();

        for i in 0..t.len() {
            assert_eq!(combined[i], first[i] + second[i]);
        }
    }

    #[test]
    fn test_three_way_combination() {
        let mut rng = StdRng::seed_from_u64(0);
        let t = grid(200);
        let combo = Superposition::harmonic(Waveform::new(WaveKind::Sine, 100.0), WaveKind::Sine)
            .with(Waveform::new(WaveKind::Sawtooth, 50.0).with_amplitude(0.25));
        assert_eq!(combo.components().len(), 3);

        let combined = combo.generate(&t, &mut rng).unwrap();
        let mut expected = vec![0.0; t.len()];
        for component in combo.components() {
            expected = superpose(&expected, &component.generate(&t, &mut rng).unwrap()).unwrap();
        }
        assert_eq!(combined, expected);
    }

    #[test]
    fn test_random_component_uses_injected_rng() {
        let t = grid(64);
        let combo = Superposition::harmonic(Waveform::new(WaveKind::Sine, 100.0), WaveKind::Random);
        let a = combo.generate(&t, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = combo.generate(&t, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_is_silent() {
        let mut rng = StdRng::seed_from_u64(0);
        let samples = Superposition::new(Vec::new())
            .generate(&grid(10), &mut rng)
            .unwrap();
        assert_eq!(samples, vec![0.0; 10]);
    }

    #[test]
    fn test_component_error_propagates() {
        let mut rng = StdRng::seed_from_u64(0);
        let combo = Superposition::harmonic(Waveform::new(WaveKind::Sine, 0.0), WaveKind::Triangle);
        assert_eq!(
            combo.generate(&grid(10), &mut rng),
            Err(ScopeError::NonPositiveFrequency(0.0))
        );
    }
}
