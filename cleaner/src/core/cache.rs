//! Persistent geocode cache keyed by query string
//!
//! The whole cache is read once before a run, mutated in memory and
//! serialized back in full afterwards. A recorded miss is stored as `{}` so
//! that negative lookups are not repeated on later runs.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::CleanerResult;
use crate::types::GeocodeResult;

/// In-memory view of the cache file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeocodeCache {
    entries: BTreeMap<String, Option<GeocodeResult>>,
}

impl GeocodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode cache file contents.
    ///
    /// Blank content is an empty cache. Any other content must be a JSON
    /// object; entries that are not usable results load as recorded misses.
    pub fn from_json(content: &str) -> CleanerResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let raw: Map<String, Value> = serde_json::from_str(content)?;
        let entries = raw
            .into_iter()
            .map(|(query, value)| (query, serde_json::from_value::<GeocodeResult>(value).ok()))
            .collect();

        Ok(Self { entries })
    }

    /// Encode as a pretty-printed object with sorted keys
    pub fn to_json(&self) -> CleanerResult<String> {
        let mut out = Map::new();
        for (query, entry) in &self.entries {
            let value = match entry {
                Some(result) => serde_json::to_value(result)?,
                None => Value::Object(Map::new()),
            };
            out.insert(query.clone(), value);
        }
        Ok(serde_json::to_string_pretty(&Value::Object(out))?)
    }

    /// Look up a query; the outer `None` means the query was never looked up,
    /// `Some(None)` is a recorded miss
    pub fn get(&self, query: &str) -> Option<Option<&GeocodeResult>> {
        self.entries.get(query).map(Option::as_ref)
    }

    pub fn put(&mut self, query: impl Into<String>, result: Option<GeocodeResult>) {
        self.entries.insert(query.into(), result);
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
