//! Cumulative return calculation and the dashboard performance pipeline.

mod performance_model;
mod performance_service;
mod return_calculator;

pub use performance_model::*;
pub use performance_service::*;
pub use return_calculator::{cumulative_returns, format_percent, period_return};
