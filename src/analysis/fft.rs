//! FFT computation for the one-sided spectrum.

use rustfft::{Fft, FftPlanner, num_complex::Complex};
use std::f64::consts::PI;
use std::sync::Arc;

use super::Spectrum;
use crate::error::{Result, ScopeError};

/// Computes the one-sided magnitude and phase spectrum of `signal`.
///
/// # Arguments
/// * `signal` - Uniformly sampled signal, at least 2 samples
/// * `sample_rate` - Sample rate in Hz (reciprocal of the time-grid step)
///
/// # Returns
/// A [`Spectrum`] with `⌊N/2⌋` bins starting at 0 Hz.
///
/// Every retained bin, DC included, is scaled by `2/N`. For DC this reads
/// twice the true mean; that reading is kept as is.
///
/// # Errors
///
/// * `ScopeError::DegenerateSignal` if `signal` has fewer than 2 samples
/// * `ScopeError::NonPositiveSampleRate` if `sample_rate` is zero, negative or not finite
pub fn analyze(signal: &[f64], sample_rate: f64) -> Result<Spectrum> {
    let n = signal.len();
    if n < 2 {
        return Err(ScopeError::DegenerateSignal { len: n });
    }
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(ScopeError::NonPositiveSampleRate(sample_rate));
    }

    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft: Arc<dyn Fft<f64>> = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    let n_positive = n / 2;
    let bin_width = sample_rate / n as f64;
    let scale = 2.0 / n as f64;

    let frequencies = (0..n_positive).map(|k| k as f64 * bin_width).collect();
    let magnitude = buffer[..n_positive]
        .iter()
        .map(|x| x.norm() * scale)
        .collect();
    let phase = buffer[..n_positive].iter().map(|&x| bin_phase(x)).collect();

    log::debug!(
        "analyzed {} samples at {} Hz: {} bins of {} Hz",
        n,
        sample_rate,
        n_positive,
        bin_width
    );

    Ok(Spectrum {
        frequencies,
        magnitude,
        phase,
        sample_rate,
        fft_size: n,
    })
}

/// Phase of one bin in (−π, π]; empty bins report 0.
fn bin_phase(x: Complex<f64>) -> f64 {
    if x.norm() == 0.0 {
        return 0.0;
    }
    // atan2 can land on -π when the imaginary part is -0.0
    let angle = x.arg();
    if angle <= -PI { PI } else { angle }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sinusoid(
        freq: f64,
        amplitude: f64,
        phase: f64,
        sample_rate: f64,
        n: usize,
    ) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let t = i as f64 / sample_rate;
                amplitude * (2.0 * PI * freq * t + phase).sin()
            })
            .collect()
    }

    #[test]
    fn test_output_lengths() {
        for n in [2, 3, 4, 5, 10, 11, 1000, 1001] {
            let signal = vec![0.5; n];
            let spectrum = analyze(&signal, 100.0).unwrap();
            assert_eq!(spectrum.frequencies.len(), n / 2);
            assert_eq!(spectrum.magnitude.len(), n / 2);
            assert_eq!(spectrum.phase.len(), n / 2);
            assert_eq!(spectrum.fft_size, n);
        }
    }

    #[test]
    fn test_frequency_axis() {
        let spectrum = analyze(&[0.0; 8], 8000.0).unwrap();
        assert_eq!(spectrum.frequencies, vec![0.0, 1000.0, 2000.0, 3000.0]);
    }

    #[test]
    fn test_frequencies_strictly_ascending() {
        let spectrum = analyze(&vec![1.0; 999], 44_100.0).unwrap();
        assert_eq!(spectrum.frequencies[0], 0.0);
        for pair in spectrum.frequencies.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_fft_sinusoid_peak() {
        // 440 Hz lands exactly on bin 44 with 10 Hz bins
        let samples = create_sinusoid(440.0, 1.0, 0.0, 10_000.0, 1000);
        let spectrum = analyze(&samples, 10_000.0).unwrap();

        let peak = spectrum.peak_frequency().unwrap();
        assert_eq!(peak, 440.0);

        let peak_mag = spectrum.magnitude[44];
        assert!(
            (peak_mag - 1.0).abs() < 1e-9,
            "Peak magnitude {} should be 1.0",
            peak_mag
        );
        // Leakage-free: every other bin is essentially empty
        for (k, &m) in spectrum.magnitude.iter().enumerate() {
            if k != 44 {
                assert!(m < 1e-9, "bin {} has magnitude {}", k, m);
            }
        }
    }

    #[test]
    fn test_sine_and_cosine_phase() {
        let sine = create_sinusoid(50.0, 2.0, 0.0, 1000.0, 200);
        let spectrum = analyze(&sine, 1000.0).unwrap();
        let bin = 10;
        assert!((spectrum.magnitude[bin] - 2.0).abs() < 1e-9);
        assert!((spectrum.phase[bin] + PI / 2.0).abs() < 1e-9);

        let cosine = create_sinusoid(50.0, 2.0, PI / 2.0, 1000.0, 200);
        let spectrum = analyze(&cosine, 1000.0).unwrap();
        assert!(spectrum.phase[bin].abs() < 1e-9);
    }

    #[test]
    fn test_dc_reads_double() {
        // Known approximation: the 2/N scale is applied to DC as well
        let spectrum = analyze(&[0.75; 64], 64.0).unwrap();
        assert!((spectrum.magnitude[0] - 1.5).abs() < 1e-12);
        assert!(spectrum.phase[0].abs() < 1e-12);
    }

    #[test]
    fn test_zero_signal() {
        let spectrum = analyze(&[0.0; 128], 1000.0).unwrap();
        assert!(spectrum.magnitude.iter().all(|&m| m == 0.0));
        assert!(spectrum.phase.iter().all(|&p| p == 0.0));
    }

    #[test]
    fn test_phase_range() {
        let samples: Vec<f64> = (0..257).map(|i| ((i * 37) % 11) as f64 - 5.0).collect();
        let spectrum = analyze(&samples, 1.0).unwrap();
        for &p in &spectrum.phase {
            assert!(p > -PI && p <= PI, "phase {} out of range", p);
        }
    }

    #[test]
    fn test_bin_phase_normalisation() {
        assert_eq!(bin_phase(Complex::new(-1.0, -0.0)), PI);
        assert_eq!(bin_phase(Complex::new(-1.0, 0.0)), PI);
        assert_eq!(bin_phase(Complex::new(0.0, 0.0)), 0.0);
        assert_eq!(bin_phase(Complex::new(-0.0, -0.0)), 0.0);
    }

    #[test]
    fn test_two_samples() {
        let spectrum = analyze(&[1.0, -1.0], 2.0).unwrap();
        assert_eq!(spectrum.frequencies, vec![0.0]);
        assert!(spectrum.magnitude[0].abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_lengths_rejected() {
        assert_eq!(
            analyze(&[], 1000.0),
            Err(ScopeError::DegenerateSignal { len: 0 })
        );
        assert_eq!(
            analyze(&[1.0], 1000.0),
            Err(ScopeError::DegenerateSignal { len: 1 })
        );
    }

    #[test]
    fn test_bad_sample_rate_rejected() {
        let signal = [0.0; 16];
        for bad in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                analyze(&signal, bad),
                Err(ScopeError::NonPositiveSampleRate(_))
            ));
        }
    }
}
