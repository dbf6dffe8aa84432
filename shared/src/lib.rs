//! Shared types for the company crawl-and-clean pipeline
//!
//! Contains only the types that cross the crawl → clean boundary (the raw
//! record artifact), the shared error type, and the logging bootstrap used
//! by both binaries.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
