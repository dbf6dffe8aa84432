//! Crawler trait definitions for dependency injection

use async_trait::async_trait;

use crate::error::CrawlerResult;
use crate::types::{CompanyCard, CompanyOverview};

/// Read-only access to the company directory
#[mockall::automock]
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Fetch one listing page and parse its summary cards.
    ///
    /// Malformed cards are dropped; an empty vector means the listing is exhausted.
    async fn list_page(&self, page: u32) -> CrawlerResult<Vec<CompanyCard>>;

    /// Fetch the detail payload for one company
    async fn fetch_overview(&self, company_id: &str) -> CrawlerResult<CompanyOverview>;
}
