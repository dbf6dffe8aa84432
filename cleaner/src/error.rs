//! Cleaner error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Geocoder request failed for '{query}': {message}")]
    GeocoderError { query: String, message: String },

    #[error("Geocode cache unreadable at {path}: {message}")]
    CacheError { path: String, message: String },

    #[error("Input artifact unreadable at {path}: {message}")]
    InputError { path: String, message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

pub type CleanerResult<T> = Result<T, CleanerError>;
