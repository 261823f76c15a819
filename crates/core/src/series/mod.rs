//! Value series model, lookback periods and windowing.

mod period_model;
mod series_model;
mod window;

pub use period_model::*;
pub use series_model::*;
pub use window::{has_sufficient_points, window, window_today};

pub(crate) use window::today;

#[cfg(test)]
mod series_tests;
