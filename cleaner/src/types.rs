//! Cleaner data types

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// First geocoder candidate for a query.
///
/// The geocoding service reports coordinates as strings; numbers are also
/// accepted on input and both are written back as strings. Fields this
/// crate does not use are kept in `extra` so the cache preserves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    #[serde(serialize_with = "coordinate_to_string", deserialize_with = "coordinate_from_any")]
    pub lat: f64,
    #[serde(serialize_with = "coordinate_to_string", deserialize_with = "coordinate_from_any")]
    pub lon: f64,
    #[serde(default)]
    pub display_name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GeocodeResult {
    pub fn new(lat: f64, lon: f64, display_name: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            display_name: display_name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

fn coordinate_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Coordinate::deserialize(deserializer)? {
        Coordinate::Number(value) => value,
        Coordinate::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid coordinate '{}'", text)))?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(serde::de::Error::custom("coordinate must be finite"))
    }
}

fn coordinate_to_string<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

/// Reason a company could not be placed on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    NoResults,
    OutOfBbox,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::NoResults => "no_results",
            FailureReason::OutOfBbox => "out_of_bbox",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the failure log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub name: String,
    pub query: String,
    pub reason: FailureReason,
}

impl FailureRecord {
    pub const HEADERS: [&'static str; 3] = ["name", "query", "reason"];

    pub fn new(name: impl Into<String>, query: impl Into<String>, reason: FailureReason) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
            reason,
        }
    }

    pub fn to_record(&self) -> [&str; 3] {
        [&self.name, &self.query, self.reason.as_str()]
    }
}

/// One row of the clean dataset.
///
/// `address`, `lat` and `lng` are either all blank or all set; coordinates
/// are fixed-point with six decimals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanCompanyRow {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub website: String,
    pub careers_url: String,
    pub tags: String,
    pub lat: String,
    pub lng: String,
}

impl CleanCompanyRow {
    pub const HEADERS: [&'static str; 9] = [
        "name",
        "address",
        "city",
        "state",
        "website",
        "careers_url",
        "tags",
        "lat",
        "lng",
    ];

    /// Fill the geo columns from an accepted result
    pub fn place(&mut self, result: &GeocodeResult) {
        self.address = result.display_name.clone();
        self.lat = format!("{:.6}", result.lat);
        self.lng = format!("{:.6}", result.lon);
    }

    pub fn is_placed(&self) -> bool {
        !self.lat.is_empty()
    }

    pub fn to_record(&self) -> [&str; 9] {
        [
            &self.name,
            &self.address,
            &self.city,
            &self.state,
            &self.website,
            &self.careers_url,
            &self.tags,
            &self.lat,
            &self.lng,
        ]
    }
}

/// Counters reported at the end of a cleaning run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Clean rows written
    pub rows: usize,
    /// Failure rows written
    pub failures: usize,
    /// Geocoder calls made
    pub lookups: usize,
    /// Queries answered from the cache
    pub cache_hits: usize,
}
