//! The one-sided spectrum produced by [`analyze`](super::analyze).

/// Parallel frequency, magnitude and phase sequences for the non-negative half
/// of a transform.
///
/// All three vectors have the same length, `⌊fft_size / 2⌋`, and
/// `frequencies` ascends strictly from 0 Hz.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spectrum {
    /// Frequency bins in Hz.
    pub frequencies: Vec<f64>,
    /// Magnitude of each bin: |X(f)| · 2 / N.
    pub magnitude: Vec<f64>,
    /// Phase in radians: arg(X(f)), in (−π, π].
    pub phase: Vec<f64>,
    /// Sample rate used for the analysis (Hz).
    pub sample_rate: f64,
    /// Transform length, equal to the number of input samples.
    pub fft_size: usize,
}

impl Spectrum {
    /// Number of retained bins.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Spacing between adjacent bins in Hz.
    pub fn bin_width(&self) -> f64 {
        self.sample_rate / self.fft_size as f64
    }

    /// Find the frequency with the maximum magnitude.
    ///
    /// Ties resolve to the lowest frequency.
    pub fn peak_frequency(&self) -> Option<f64> {
        self.peak_bin().map(|bin| self.frequencies[bin])
    }

    /// Index of the bin with the maximum magnitude.
    pub fn peak_bin(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &m) in self.magnitude.iter().enumerate() {
            match best {
                Some((_, peak)) if m <= peak => {}
                _ => best = Some((i, m)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Find the magnitude at a specific frequency (nearest bin).
    pub fn magnitude_at(&self, freq: f64) -> Option<f64> {
        let bin = self.frequency_to_bin(freq)?;
        self.magnitude.get(bin).copied()
    }

    /// Magnitude in decibels, `20·log10(magnitude)`.
    ///
    /// Empty bins map to negative infinity; the log plot is expected to clip them.
    pub fn magnitude_db(&self) -> Vec<f64> {
        self.magnitude.iter().map(|m| 20.0 * m.log10()).collect()
    }

    /// Phase converted to degrees, (−180, 180].
    pub fn phase_degrees(&self) -> Vec<f64> {
        self.phase.iter().map(|p| p.to_degrees()).collect()
    }

    /// Splits into the `(frequencies, magnitude, phase)` triple.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.frequencies, self.magnitude, self.phase)
    }

    /// Convert a frequency to the nearest bin index.
    fn frequency_to_bin(&self, freq: f64) -> Option<usize> {
        if self.frequencies.is_empty() || freq.is_nan() || freq < 0.0 {
            return None;
        }
        let bin = (freq / self.bin_width()).round() as usize;
        if bin < self.frequencies.len() {
            Some(bin)
        } else {
            None
        }
    }
}
