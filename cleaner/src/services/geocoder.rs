//! HTTP geocoding client

use async_trait::async_trait;

use shared::{Stage, stage_debug};

use crate::config::CleanerConfig;
use crate::error::{CleanerError, CleanerResult};
use crate::traits::Geocoder;
use crate::types::GeocodeResult;

/// Geocoder backed by a Nominatim-compatible `/search` endpoint
pub struct RealGeocoder {
    client: reqwest::Client,
    search_url: String,
}

impl RealGeocoder {
    /// Create a client sending the configured identifying user agent
    pub fn new(config: &CleanerConfig) -> CleanerResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| CleanerError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            search_url: format!("{}/search", config.geocoder_url),
        })
    }
}

#[async_trait]
impl Geocoder for RealGeocoder {
    async fn geocode(&self, query: &str) -> CleanerResult<Option<GeocodeResult>> {
        let failed = |message: String| CleanerError::GeocoderError {
            query: query.to_string(),
            message,
        };

        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(failed(format!("HTTP {}", response.status().as_u16())));
        }

        let candidates: Vec<GeocodeResult> = response
            .json()
            .await
            .map_err(|e| failed(format!("Invalid response body: {}", e)))?;

        stage_debug!(Stage::Cleaner, "'{}' returned {} candidates", query, candidates.len());
        Ok(candidates.into_iter().next())
    }
}
