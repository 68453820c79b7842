//! Fair-value estimators derived from retained price history
//!
//! - `moving`: pure fixed-window statistics (mean, windowed mean, stddev)
//! - `fair_value`: the per-tick `FairValues` table

pub mod fair_value;
pub mod moving;

pub use fair_value::{FairValues, DEFAULT_FAIR_VALUE_MIN_SAMPLES};
pub use moving::{full_stddev, prior_window_mean, simple_mean, stddev, windowed_mean};
