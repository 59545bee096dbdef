//! Core sampling types and traits.
//!
//! This module provides the fundamental abstractions used throughout the
//! library:
//! - `TimeGrid` for the uniformly spaced sample instants shared by generation and analysis
//! - `Signal` trait for anything that can be evaluated over a time grid

mod signal;
mod time_grid;

pub use signal::Signal;
pub use time_grid::{MAX_SAMPLES, TimeGrid};
