//! Oscilloscope front panel: display settings and the capture pipeline.
//!
//! A capture runs the whole data flow once: build the time grid from the
//! horizontal settings, generate the selected signal over it, and analyze the
//! result at the grid's sample rate. Rendering is left to the caller; the
//! settings only report the axis ranges a renderer should use.

use crate::analysis::{Spectrum, analyze};
use crate::combinators::Superposition;
use crate::core::TimeGrid;
use crate::error::{Result, ScopeError};
use crate::generator::{WaveKind, Waveform};
use rand::Rng;

/// Selector label that picks the superposition preset.
pub const SUPERPOSITION: &str = "Superposition";

/// Horizontal and vertical display settings.
///
/// # Examples
///
/// ```
/// use scopesim::ScopeSettings;
///
/// let settings = ScopeSettings::default().with_time_per_div(0.001);
/// let grid = settings.time_grid().unwrap();
/// assert_eq!(grid.len(), 100);
/// assert_eq!(settings.vertical_range(), (-10.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScopeSettings {
    /// Vertical scale in volts per division.
    pub volts_per_div: f64,
    /// Horizontal scale in seconds per division.
    pub time_per_div: f64,
    /// Number of divisions on each axis of the graticule.
    pub divisions: u32,
    /// Spacing between samples in seconds.
    pub sample_step: f64,
}

impl Default for ScopeSettings {
    fn default() -> Self {
        Self {
            volts_per_div: 1.0,
            time_per_div: 0.01,
            divisions: 10,
            sample_step: 1e-4,
        }
    }
}

impl ScopeSettings {
    pub fn with_volts_per_div(mut self, volts_per_div: f64) -> Self {
        self.volts_per_div = volts_per_div;
        self
    }

    pub fn with_time_per_div(mut self, time_per_div: f64) -> Self {
        self.time_per_div = time_per_div;
        self
    }

    pub fn with_divisions(mut self, divisions: u32) -> Self {
        self.divisions = divisions;
        self
    }

    pub fn with_sample_step(mut self, sample_step: f64) -> Self {
        self.sample_step = sample_step;
        self
    }

    /// Checks that every setting is positive and finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.volts_per_div.is_finite() && self.volts_per_div > 0.0) {
            return Err(ScopeError::InvalidSetting {
                name: "volts_per_div",
                value: self.volts_per_div,
            });
        }
        if !(self.time_per_div.is_finite() && self.time_per_div > 0.0) {
            return Err(ScopeError::InvalidSetting {
                name: "time_per_div",
                value: self.time_per_div,
            });
        }
        if self.divisions == 0 {
            return Err(ScopeError::InvalidSetting {
                name: "divisions",
                value: 0.0,
            });
        }
        if !(self.sample_step.is_finite() && self.sample_step > 0.0) {
            return Err(ScopeError::InvalidStep(self.sample_step));
        }
        Ok(())
    }

    /// Time span shown across the screen.
    pub fn window_duration(&self) -> f64 {
        self.time_per_div * self.divisions as f64
    }

    /// Sample rate implied by the sample step, in Hz.
    pub fn sample_rate(&self) -> f64 {
        1.0 / self.sample_step
    }

    /// Sample instants covering `[0, window_duration)`.
    pub fn time_grid(&self) -> Result<TimeGrid> {
        self.validate()?;
        TimeGrid::from_duration(self.window_duration(), self.sample_step)
    }

    /// Vertical axis limits, `±volts_per_div · divisions`.
    pub fn vertical_range(&self) -> (f64, f64) {
        let half = self.volts_per_div * self.divisions as f64;
        (-half, half)
    }

    /// Horizontal axis limits: the first and last instant of `grid`.
    pub fn horizontal_range(&self, grid: &TimeGrid) -> Option<(f64, f64)> {
        Some((*grid.first()?, *grid.last()?))
    }
}

/// What to put on the screen: one waveform or a sum of several.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalSource {
    Single(Waveform),
    Superposition(Superposition),
}

impl SignalSource {
    /// Maps a selector label and the front-panel knobs to a source.
    ///
    /// `"Superposition"` selects a sine at the given settings plus a triangle
    /// at twice the frequency and half the amplitude. Every other label goes
    /// through [`WaveKind::from_name`], so unknown labels give a flat trace.
    ///
    /// # Examples
    ///
    /// ```
    /// use scopesim::SignalSource;
    ///
    /// let source = SignalSource::from_selection("Square", 440.0, 1.0, 0.0);
    /// assert_eq!(source.title(), "Square Wave");
    ///
    /// let combo = SignalSource::from_selection("Superposition", 440.0, 1.0, 0.0);
    /// assert_eq!(combo.title(), "Superposition of Sine and Triangle Waves");
    /// ```
    pub fn from_selection(name: &str, frequency: f64, amplitude: f64, phase: f64) -> Self {
        if name.trim().eq_ignore_ascii_case(SUPERPOSITION) {
            let base = Waveform::new(WaveKind::Sine, frequency)
                .with_amplitude(amplitude)
                .with_phase(phase);
            return SignalSource::Superposition(Superposition::harmonic(base, WaveKind::Triangle));
        }
        SignalSource::Single(
            Waveform::new(WaveKind::from_name(name), frequency)
                .with_amplitude(amplitude)
                .with_phase(phase),
        )
    }

    /// Title for the time-domain trace.
    pub fn title(&self) -> String {
        match self {
            SignalSource::Single(wave) => format!("{} Wave", wave.kind),
            SignalSource::Superposition(combo) => {
                let names: Vec<&str> = combo.components().iter().map(|c| c.kind.name()).collect();
                match names.split_last() {
                    None => "Empty Superposition".to_string(),
                    Some((last, [])) => format!("Superposition of {last} Waves"),
                    Some((last, rest)) => {
                        format!("Superposition of {} and {} Waves", rest.join(", "), last)
                    }
                }
            }
        }
    }

    /// Generates the source over `time_grid`.
    pub fn generate<R: Rng>(&self, time_grid: &[f64], rng: &mut R) -> Result<Vec<f64>> {
        match self {
            SignalSource::Single(wave) => wave.generate(time_grid, rng),
            SignalSource::Superposition(combo) => combo.generate(time_grid, rng),
        }
    }
}

impl From<Waveform> for SignalSource {
    fn from(wave: Waveform) -> Self {
        SignalSource::Single(wave)
    }
}

impl From<Superposition> for SignalSource {
    fn from(combo: Superposition) -> Self {
        SignalSource::Superposition(combo)
    }
}

/// One acquisition: the time-domain trace and its spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct Capture {
    pub settings: ScopeSettings,
    pub title: String,
    pub time_grid: TimeGrid,
    pub samples: Vec<f64>,
    pub spectrum: Spectrum,
}

impl Capture {
    /// Number of samples on screen that fall outside the vertical range.
    pub fn clipped_samples(&self) -> usize {
        let (low, high) = self.settings.vertical_range();
        self.samples
            .iter()
            .filter(|&&s| s < low || s > high)
            .count()
    }
}

/// Builds the time grid, generates `source` over it and analyzes the result.
///
/// # Errors
///
/// Invalid settings, a non-positive source frequency, or a window holding
/// fewer than 2 samples.
pub fn capture<R: Rng>(
    settings: &ScopeSettings,
    source: &SignalSource,
    rng: &mut R,
) -> Result<Capture> {
    let time_grid = settings.time_grid()?;
    let samples = source.generate(&time_grid, rng)?;
    let spectrum = analyze(&samples, time_grid.sample_rate())?;
    let title = source.title();

    log::debug!(
        "captured {}: {} samples over {} s, peak at {:?} Hz",
        title,
        samples.len(),
        time_grid.duration(),
        spectrum.peak_frequency()
    );

    Ok(Capture {
        settings: *settings,
        title,
        time_grid,
        samples,
        spectrum,
    })
}
