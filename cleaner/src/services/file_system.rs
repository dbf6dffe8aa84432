//! Filesystem-backed artifact storage

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use shared::{RawCompanyRecord, Stage, stage_debug};

use crate::core::GeocodeCache;
use crate::error::{CleanerError, CleanerResult};
use crate::traits::FileSystem;
use crate::types::{CleanCompanyRow, FailureRecord};

/// Real filesystem implementation
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }

    async fn write_file(&self, path: &Path, content: Vec<u8>) -> CleanerResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, content).await?;
        Ok(())
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a header row and records as CSV bytes
fn csv_bytes<'a, const N: usize>(
    headers: [&str; N],
    records: impl IntoIterator<Item = [&'a str; N]>,
) -> CleanerResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    for record in records {
        writer.write_record(record)?;
    }
    writer.into_inner().map_err(|e| CleanerError::IoError(e.into_error()))
}

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_raw_records(&self, path: &Path) -> CleanerResult<Vec<RawCompanyRecord>> {
        let input_error = |message: String| CleanerError::InputError {
            path: path.display().to_string(),
            message,
        };

        let content = fs::read_to_string(path).await.map_err(|e| input_error(e.to_string()))?;
        let records: Vec<RawCompanyRecord> =
            serde_json::from_str(&content).map_err(|e| input_error(e.to_string()))?;

        stage_debug!(Stage::Cleaner, "Read {} raw records from {}", records.len(), path.display());
        Ok(records)
    }

    async fn read_cache(&self, path: &Path) -> CleanerResult<GeocodeCache> {
        let cache_error = |message: String| CleanerError::CacheError {
            path: path.display().to_string(),
            message,
        };

        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                stage_debug!(Stage::Cleaner, "No geocode cache at {}, starting empty", path.display());
                return Ok(GeocodeCache::new());
            }
            Err(e) => return Err(cache_error(e.to_string())),
        };

        GeocodeCache::from_json(&content).map_err(|e| cache_error(e.to_string()))
    }

    async fn write_cache(&self, path: &Path, cache: &GeocodeCache) -> CleanerResult<()> {
        let content = cache.to_json()?;
        self.write_file(path, content.into_bytes()).await?;
        stage_debug!(Stage::Cleaner, "Wrote {} cached queries to {}", cache.len(), path.display());
        Ok(())
    }

    async fn write_rows(&self, path: &Path, rows: &[CleanCompanyRow]) -> CleanerResult<()> {
        let content = csv_bytes(CleanCompanyRow::HEADERS, rows.iter().map(CleanCompanyRow::to_record))?;
        self.write_file(path, content).await
    }

    async fn write_failures(&self, path: &Path, failures: &[FailureRecord]) -> CleanerResult<()> {
        let content = csv_bytes(FailureRecord::HEADERS, failures.iter().map(FailureRecord::to_record))?;
        self.write_file(path, content).await
    }
}
