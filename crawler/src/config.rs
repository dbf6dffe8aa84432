//! Crawler configuration
//!
//! Built once from command-line/environment values and passed explicitly
//! into the client and crawler. Validation happens here so that a bad value
//! aborts before any request is made.

use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::error::{CrawlerError, CrawlerResult};

/// Default directory site (listing pages and careers links)
pub const DEFAULT_SITE_URL: &str = "https://www.builtinla.com";

/// Default directory API (per-company overview)
pub const DEFAULT_API_URL: &str = "https://api.builtin.com";

/// Default browser-like client header for directory requests
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Validated crawler configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlerConfig {
    /// Maximum number of unique companies to collect
    pub limit: usize,
    /// Pause after every outbound request
    pub delay: Duration,
    /// Raw artifact destination
    pub output: PathBuf,
    /// Directory site origin, without trailing slash
    pub site_url: String,
    /// Directory API origin, without trailing slash
    pub api_url: String,
    pub user_agent: String,
}

impl CrawlerConfig {
    /// Validate raw option values into a configuration
    pub fn new(
        limit: usize,
        delay_secs: f64,
        output: PathBuf,
        site_url: &str,
        api_url: &str,
        user_agent: &str,
    ) -> CrawlerResult<Self> {
        let delay = Duration::try_from_secs_f64(delay_secs).map_err(|_| CrawlerError::ConfigError {
            message: format!("delay must be a non-negative number of seconds, got {}", delay_secs),
        })?;

        if user_agent.trim().is_empty() {
            return Err(CrawlerError::ConfigError {
                message: "user agent must not be empty".to_string(),
            });
        }

        Ok(Self {
            limit,
            delay,
            output,
            site_url: validate_origin("site_url", site_url)?,
            api_url: validate_origin("api_url", api_url)?,
            user_agent: user_agent.to_string(),
        })
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            limit: 100,
            delay: Duration::from_millis(400),
            output: PathBuf::from("data/companies_raw.json"),
            site_url: DEFAULT_SITE_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

fn validate_origin(field: &str, value: &str) -> CrawlerResult<String> {
    let parsed = Url::parse(value).map_err(|e| CrawlerError::ConfigError {
        message: format!("{} is not a valid URL ({}): {}", field, e, value),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(CrawlerError::ConfigError {
            message: format!("{} must be an http(s) URL with a host: {}", field, value),
        });
    }

    Ok(value.trim_end_matches('/').to_string())
}
