//! Pulsefolio Chart - keeps a long-lived chart instance in sync with derived
//! analytics.
//!
//! Controllers create their chart once, push new data into the existing
//! series on every update and tear the chart down when dropped. The charting
//! library itself sits behind [`ChartApi`]; [`recording`] provides an
//! in-memory backend.

mod chart_model;
mod chart_traits;
mod convert;
mod hover;
mod indicator_chart;
mod performance_chart;
pub mod recording;

pub use chart_model::*;
pub use chart_traits::*;
pub use convert::{return_points, value_points};
pub use hover::*;
pub use indicator_chart::IndicatorChart;
pub use performance_chart::{ChartStatus, PerformanceChart};

#[cfg(test)]
mod indicator_chart_tests;
#[cfg(test)]
mod performance_chart_tests;
