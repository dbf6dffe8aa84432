//! Shared error types for the crawl-and-clean pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Failed to install tracing subscriber: {message}")]
    LoggingInit { message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
