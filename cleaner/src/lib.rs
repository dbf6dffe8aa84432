//! Company dataset cleaning library
//!
//! Deduplicates raw directory records by normalized name, geocodes each
//! unique company through a persistent query cache, keeps only coordinates
//! inside the configured bounding box, and emits the clean dataset together
//! with a failure log.

pub mod config;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::CleanerConfig;
pub use crate::core::{BoundingBox, GeocodeCache, NameNormalizer, clean_url, normalize};
pub use pipeline::{Pipeline, geocode_query};
pub use error::{CleanerError, CleanerResult};
pub use traits::{FileSystem, Geocoder, MockFileSystem, MockGeocoder};
pub use types::*;
