//! Raw record artifact persistence

use std::path::Path;
use tokio::fs;

use shared::{RawCompanyRecord, Stage, stage_debug};

use crate::error::CrawlerResult;

/// Write records as a pretty-printed JSON array, creating parent directories
pub async fn write_raw_records(path: &Path, records: &[RawCompanyRecord]) -> CrawlerResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let content = serde_json::to_string_pretty(records)?;
    fs::write(path, content).await?;

    stage_debug!(Stage::Crawler, "Wrote {} raw records to {}", records.len(), path.display());
    Ok(())
}
