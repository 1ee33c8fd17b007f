/// Centralized error types for the business-day calculator
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    // Network Errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Holiday API returned status {status} for year {year}")]
    ApiError { year: i32, status: u16 },

    // Data Errors
    #[error("Deserialization failed: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Invalid holiday record for year {year}: {reason}")]
    InvalidHolidayRecord { year: i32, reason: String },

    // Range / Input Errors
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // I/O Errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
