//! Crawler error types

use shared::SharedError;
use thiserror::Error;

/// Result type for crawler operations
pub type CrawlerResult<T> = Result<T, CrawlerError>;

/// Crawler error types
#[derive(Error, Debug)]
pub enum CrawlerError {
    #[error("HTTP request failed: {url} - {message}")]
    HttpError { url: String, message: String },

    #[error("Unexpected status {status} from {url}")]
    StatusError { url: String, status: u16 },

    #[error("Malformed response from {url}: {message}")]
    ParseError { url: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
