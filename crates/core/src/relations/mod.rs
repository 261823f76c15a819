//! Reverse lookup over one-to-many relations, such as which institutional
//! filers hold a given ticker.

mod relations_model;
mod relations_service;

pub use relations_model::*;
pub use relations_service::*;

#[cfg(test)]
mod relations_service_tests;
