//! Core error types for the Pulsefolio analytics core.
//!
//! Sparse or degenerate series are not errors: they surface as explicit
//! states on the derived structures. The types here cover malformed input
//! (unordered series, unknown selectors) and settings loading.

use chrono::{NaiveDate, ParseError as ChronoParseError};
use std::num::ParseIntError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for caller-supplied series and selectors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Series dates must be strictly increasing: point {index} ({date}) is out of order")]
    UnorderedSeries { index: usize, date: NaiveDate },

    #[error("Unknown period selector '{0}'")]
    InvalidPeriod(String),

    #[error("Unknown benchmark '{0}'")]
    UnknownBenchmark(String),

    #[error("Failed to parse integer: {0}")]
    IntegerParse(#[from] ParseIntError),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Self {
        Error::Validation(ValidationError::IntegerParse(err))
    }
}
