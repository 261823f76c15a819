//! Pulsefolio Core - time-series analytics for the investment dashboard.
//!
//! This crate turns fetched snapshot, FX and filing data into the derived
//! numbers the dashboard renders: windowed return series, benchmark
//! comparisons, alert indicators and reverse lookups. It performs no I/O
//! beyond optional settings loading.

pub mod benchmark;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod indicators;
pub mod performance;
pub mod relations;
pub mod series;
pub mod settings;
pub mod snapshot;

pub use benchmark::{BenchmarkKey, BenchmarkOutcome, BenchmarkResolver};
pub use performance::{PerformanceService, PerformanceView, ReturnOutcome, ReturnSeries};
pub use series::{Period, ValuePoint, ValueSeries};
pub use settings::AnalyticsSettings;
pub use snapshot::Snapshot;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
