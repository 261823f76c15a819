//! Threshold and streak indicators over raw value histories.
//!
//! Used for "at recent high" badges, alert eligibility and alert-first
//! ordering of radar items.

mod indicators_model;
mod indicators_service;

pub use indicators_model::*;
pub use indicators_service::*;
