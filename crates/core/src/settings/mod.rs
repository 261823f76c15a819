//! Analytics settings: defaults, JSON files and environment overrides.

mod settings_model;
mod settings_service;

pub use settings_model::*;
pub use settings_service::*;
