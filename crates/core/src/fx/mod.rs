//! FX (Foreign Exchange) module - rate history model and trend derivation.

mod fx_model;
mod fx_service;

pub use fx_model::*;
pub use fx_service::fx_trend;
