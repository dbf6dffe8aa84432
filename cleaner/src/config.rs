//! Cleaner configuration
//!
//! Assembled once in `main` from command-line/environment values. Every
//! field is validated before the pipeline starts so that a bad value aborts
//! before any file is read or request is made.

use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::core::{BoundingBox, LEGAL_SUFFIXES};
use crate::error::{CleanerError, CleanerResult};

/// Default public geocoding service
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Identifying client header required by the geocoding service
pub const DEFAULT_USER_AGENT: &str = "mapvia/0.1 (data crawl)";

pub const DEFAULT_CITY: &str = "Los Angeles";
pub const DEFAULT_STATE: &str = "CA";

/// Validated cleaner configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CleanerConfig {
    /// Raw artifact written by the crawler
    pub input: PathBuf,
    /// Clean dataset destination
    pub output: PathBuf,
    /// Failure log destination
    pub failures: PathBuf,
    /// Geocode cache, read at start and rewritten at end
    pub cache: PathBuf,
    /// Pause after every geocoder call
    pub delay: Duration,
    /// Accepted region for geocoded coordinates
    pub bbox: BoundingBox,
    /// Emit rows without any geocoding
    pub skip_geocode: bool,
    pub city: String,
    pub state: String,
    /// Geocoder origin, without trailing slash
    pub geocoder_url: String,
    pub user_agent: String,
    /// Whole-word tokens dropped from names before deduplication
    pub suffixes: Vec<String>,
}

impl CleanerConfig {
    /// Check the free-form values that cannot be validated at parse time
    pub fn validate(mut self) -> CleanerResult<Self> {
        if self.user_agent.trim().is_empty() {
            return Err(CleanerError::ConfigError {
                message: "user agent must not be empty".to_string(),
            });
        }
        if self.city.trim().is_empty() || self.state.trim().is_empty() {
            return Err(CleanerError::ConfigError {
                message: "city and state must not be empty".to_string(),
            });
        }
        self.geocoder_url = validate_origin(&self.geocoder_url)?;
        Ok(self)
    }
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/companies_raw.json"),
            output: PathBuf::from("data/companies_clean.csv"),
            failures: PathBuf::from("data/geocode_failures.csv"),
            cache: PathBuf::from("data/geocode_cache.json"),
            delay: Duration::from_secs(1),
            bbox: BoundingBox::default(),
            skip_geocode: false,
            city: DEFAULT_CITY.to_string(),
            state: DEFAULT_STATE.to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            suffixes: LEGAL_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Convert a delay in seconds, rejecting negative and non-finite values
pub fn parse_delay(delay_secs: f64) -> CleanerResult<Duration> {
    Duration::try_from_secs_f64(delay_secs).map_err(|_| CleanerError::ConfigError {
        message: format!("delay must be a non-negative number of seconds, got {}", delay_secs),
    })
}

fn validate_origin(value: &str) -> CleanerResult<String> {
    let parsed = Url::parse(value).map_err(|e| CleanerError::ConfigError {
        message: format!("geocoder_url is not a valid URL ({}): {}", e, value),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(CleanerError::ConfigError {
            message: format!("geocoder_url must be an http(s) URL with a host: {}", value),
        });
    }

    Ok(value.trim_end_matches('/').to_string())
}
