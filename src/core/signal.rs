//! Core signal trait.

/// Common interface for all signal sources.
///
/// A signal is evaluated at explicit time instants rather than streamed, so
/// the same source rendered over the same grid lines up sample-for-sample
/// with the grid.
///
/// The trait provides two operations:
/// - Single sample evaluation via `sample_at()`
/// - Batch evaluation over a whole time grid via `render()`
///
/// `sample_at` takes `&mut self` so that stochastic sources can advance
/// their random number generator.
pub trait Signal {
    /// Evaluates the signal at time `t` (seconds).
    fn sample_at(&mut self, t: f64) -> f64;

    /// Evaluates the signal at every instant of `time_grid`.
    ///
    /// The output has the same length and index alignment as `time_grid`.
    /// Implementors may override this for more efficient batch processing.
    fn render(&mut self, time_grid: &[f64]) -> Vec<f64> {
        time_grid.iter().map(|&t| self.sample_at(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp;

    impl Signal for Ramp {
        fn sample_at(&mut self, t: f64) -> f64 {
            2.0 * t
        }
    }

    #[test]
    fn test_render_is_index_aligned() {
        let grid = [0.0, 0.5, 1.0, 1.5];
        let rendered = Ramp.render(&grid);
        assert_eq!(rendered, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_render_empty_grid() {
        assert!(Ramp.render(&[]).is_empty());
    }
}
