//! Cleaner trait definitions for dependency injection

use async_trait::async_trait;
use std::path::Path;

use shared::RawCompanyRecord;

use crate::core::GeocodeCache;
use crate::error::CleanerResult;
use crate::types::{CleanCompanyRow, FailureRecord, GeocodeResult};

/// Free-text geocoding service
#[mockall::automock]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Issue exactly one lookup.
    ///
    /// `Ok(None)` means the service answered with no candidates; only the
    /// first candidate is returned otherwise.
    async fn geocode(&self, query: &str) -> CleanerResult<Option<GeocodeResult>>;
}

/// Artifact storage for a cleaning run
#[mockall::automock]
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Read the crawler's raw JSON artifact
    async fn read_raw_records(&self, path: &Path) -> CleanerResult<Vec<RawCompanyRecord>>;

    /// Read the geocode cache; a missing file is an empty cache
    async fn read_cache(&self, path: &Path) -> CleanerResult<GeocodeCache>;

    /// Rewrite the geocode cache in full
    async fn write_cache(&self, path: &Path, cache: &GeocodeCache) -> CleanerResult<()>;

    async fn write_rows(&self, path: &Path, rows: &[CleanCompanyRow]) -> CleanerResult<()>;

    async fn write_failures(&self, path: &Path, failures: &[FailureRecord]) -> CleanerResult<()>;
}
