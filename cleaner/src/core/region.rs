//! Bounding box and region classification of geocode results

use std::fmt;
use std::str::FromStr;

use crate::error::CleanerError;
use crate::types::GeocodeResult;

/// Axis-aligned region in (min_lng, min_lat, max_lng, max_lat) order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        }
    }

    /// Inclusive range check on both axes
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lng..=self.max_lng).contains(&lng)
    }
}

impl Default for BoundingBox {
    /// Greater Los Angeles
    fn default() -> Self {
        Self::new(-118.7, 33.7, -118.1, 34.4)
    }
}

impl FromStr for BoundingBox {
    type Err = CleanerError;

    /// Parse `minLng,minLat,maxLng,maxLat`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CleanerError::ConfigError {
            message: format!("bbox '{}' {}", s, reason),
        };

        let values = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid("must contain only numbers"))?;

        let [min_lng, min_lat, max_lng, max_lat] = values[..] else {
            return Err(invalid("must have exactly four comma-separated values"));
        };

        if values.iter().any(|v| !v.is_finite()) {
            return Err(invalid("must contain only finite numbers"));
        }
        if min_lng > max_lng || min_lat > max_lat {
            return Err(invalid("has a minimum greater than its maximum"));
        }

        Ok(Self::new(min_lng, min_lat, max_lng, max_lat))
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.min_lng, self.min_lat, self.max_lng, self.max_lat)
    }
}

/// Where a lookup result places a company
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification<'a> {
    InRegion(&'a GeocodeResult),
    OutOfRegion,
    NotFound,
}

/// Classify a lookup result against the accepted region
pub fn classify<'a>(result: Option<&'a GeocodeResult>, bbox: &BoundingBox) -> Classification<'a> {
    match result {
        None => Classification::NotFound,
        Some(found) if bbox.contains(found.lat, found.lon) => Classification::InRegion(found),
        Some(_) => Classification::OutOfRegion,
    }
}
