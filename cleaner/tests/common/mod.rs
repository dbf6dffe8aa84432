//! Common test utilities for cleaner integration tests
//!
//! A temporary data directory laid out like a real run, plus a fake
//! geocoding service.

#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use cleaner::CleanerConfig;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Temporary data directory holding the input artifact
pub struct DataDir {
    pub dir: TempDir,
}

impl DataDir {
    /// Create a data directory whose raw artifact is `raw`
    pub fn with_input(raw: serde_json::Value) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("companies_raw.json"), raw.to_string()).expect("write input");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Configuration reading and writing inside this directory, no delay
    pub fn config(&self, geocoder_url: &str, skip_geocode: bool) -> CleanerConfig {
        CleanerConfig {
            input: self.path().join("companies_raw.json"),
            output: self.path().join("out").join("companies_clean.csv"),
            failures: self.path().join("out").join("geocode_failures.csv"),
            cache: self.path().join("geocode_cache.json"),
            delay: Duration::ZERO,
            skip_geocode,
            geocoder_url: geocoder_url.to_string(),
            user_agent: "cleaner-tests".to_string(),
            ..CleanerConfig::default()
        }
        .validate()
        .expect("valid test config")
    }

    /// Parsed rows of a CSV output, header included
    pub fn csv(&self, relative: &str) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(self.path().join(relative))
            .expect("open csv");
        reader
            .records()
            .map(|record| record.expect("csv record").iter().map(str::to_string).collect())
            .collect()
    }

    pub fn cache_json(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(self.path().join("geocode_cache.json")).expect("read cache");
        serde_json::from_str(&text).expect("cache json")
    }
}

/// Answer one query with the given candidate list, expecting `times` calls
pub async fn mount_search(server: &MockServer, query: &str, candidates: serde_json::Value, times: u64) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidates))
        .expect(times)
        .mount(server)
        .await;
}

/// Single candidate payload in the service's string-coordinate format
pub fn candidate(lat: &str, lon: &str, display_name: &str) -> serde_json::Value {
    serde_json::json!([{ "lat": lat, "lon": lon, "display_name": display_name }])
}
