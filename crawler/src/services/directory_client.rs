//! HTTP directory client

use async_trait::async_trait;

use crate::config::CrawlerConfig;
use crate::core::parse_company_cards;
use crate::error::{CrawlerError, CrawlerResult};
use crate::traits::DirectoryClient;
use crate::types::{CompanyCard, CompanyOverview, listing_url, overview_url};

/// Real directory client over reqwest
pub struct RealDirectoryClient {
    client: reqwest::Client,
    site_url: String,
    api_url: String,
}

impl RealDirectoryClient {
    /// Create a client sending the configured user agent on every request
    pub fn new(config: &CrawlerConfig) -> CrawlerResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| CrawlerError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            site_url: config.site_url.clone(),
            api_url: config.api_url.clone(),
        })
    }

    /// GET a URL and return the body of a successful response
    async fn fetch_text(&self, url: &str) -> CrawlerResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CrawlerError::HttpError {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(CrawlerError::StatusError {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|e| CrawlerError::HttpError {
            url: url.to_string(),
            message: format!("Failed to read body: {}", e),
        })
    }
}

#[async_trait]
impl DirectoryClient for RealDirectoryClient {
    async fn list_page(&self, page: u32) -> CrawlerResult<Vec<CompanyCard>> {
        let url = listing_url(&self.site_url, page);
        let html = self.fetch_text(&url).await?;
        Ok(parse_company_cards(&html, &url))
    }

    async fn fetch_overview(&self, company_id: &str) -> CrawlerResult<CompanyOverview> {
        let url = overview_url(&self.api_url, company_id);
        let body = self.fetch_text(&url).await?;
        serde_json::from_str(&body).map_err(|e| CrawlerError::ParseError {
            url,
            message: e.to_string(),
        })
    }
}
