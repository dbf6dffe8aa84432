//! Crawler-specific data types

use serde::Deserialize;

/// Origin tag attached to every record produced by this crawler
pub const SOURCE_TAG: &str = "built-in-la";

/// Summary card parsed from one directory listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCard {
    pub company_id: String,
    pub name: String,
    pub profile_url: Option<String>,
    pub tags: Vec<String>,
}

/// Per-company detail payload from the directory API
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompanyOverview {
    /// Company website
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub industries: Option<Vec<String>>,
}

/// Listing page URL for a 1-based page number
pub fn listing_url(site_url: &str, page: u32) -> String {
    format!("{}/companies?country=USA&page={}", site_url, page)
}

/// Detail endpoint URL for a company identifier
pub fn overview_url(api_url: &str, company_id: &str) -> String {
    format!("{}/companies/{}/overview", api_url, company_id)
}

/// Careers page URL, derived only from the company identifier
pub fn careers_url(site_url: &str, company_id: &str) -> String {
    format!("{}/jobs?companyId={}", site_url, company_id)
}
