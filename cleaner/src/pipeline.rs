//! Cleaning pipeline orchestration
//!
//! Drives one run end to end: load raw records, deduplicate by normalized
//! name, geocode each unique company through the cache, classify against
//! the bounding box, then persist the clean rows, the cache and the failure
//! log in that order.

use shared::{RawCompanyRecord, Stage, stage_debug, stage_info, stage_warn};

use crate::{
    config::CleanerConfig,
    core::{Classification, GeocodeCache, NameNormalizer, classify, clean_url, dedupe_records},
    error::CleanerResult,
    traits::{FileSystem, Geocoder},
    types::{CleanCompanyRow, FailureReason, FailureRecord, GeocodeResult, PipelineSummary},
};

/// Deterministic lookup string, also used as the cache key
pub fn geocode_query(name: &str, city: &str, state: &str) -> String {
    format!("{}, {}, {}", name, city, state)
}

/// Rows and failures produced for a set of unique records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanOutput {
    pub rows: Vec<CleanCompanyRow>,
    pub failures: Vec<FailureRecord>,
    pub lookups: usize,
    pub cache_hits: usize,
}

impl CleanOutput {
    pub fn summary(&self) -> PipelineSummary {
        PipelineSummary {
            rows: self.rows.len(),
            failures: self.failures.len(),
            lookups: self.lookups,
            cache_hits: self.cache_hits,
        }
    }
}

/// Cleaning pipeline with injected geocoder and storage
pub struct Pipeline<G, F>
where
    G: Geocoder,
    F: FileSystem,
{
    config: CleanerConfig,
    normalizer: NameNormalizer,

    /// Injected services
    geocoder: G,
    file_system: F,
}

impl<G, F> Pipeline<G, F>
where
    G: Geocoder,
    F: FileSystem,
{
    pub fn new(config: CleanerConfig, geocoder: G, file_system: F) -> Self {
        Self {
            config,
            normalizer: NameNormalizer::default(),
            geocoder,
            file_system,
        }
    }

    /// Replace the default legal-suffix normalizer, e.g. one built from
    /// `CleanerConfig::suffixes`
    pub fn with_normalizer(mut self, normalizer: NameNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Execute a full run.
    ///
    /// Lookup failures never abort the run. Reading the input or cache and
    /// writing any output are fatal; nothing is written if the input or cache
    /// cannot be read.
    pub async fn run(&self) -> CleanerResult<PipelineSummary> {
        let raw = self.file_system.read_raw_records(&self.config.input).await?;
        let raw_count = raw.len();
        let records = dedupe_records(raw, &self.normalizer);
        stage_info!(
            Stage::Cleaner,
            "Loaded {} raw records, {} unique companies",
            raw_count,
            records.len()
        );

        let mut cache = self.file_system.read_cache(&self.config.cache).await?;
        stage_debug!(Stage::Cleaner, "Geocode cache holds {} queries", cache.len());

        let output = self.clean(records, &mut cache).await;

        self.file_system.write_rows(&self.config.output, &output.rows).await?;
        self.file_system.write_cache(&self.config.cache, &cache).await?;
        self.file_system
            .write_failures(&self.config.failures, &output.failures)
            .await?;

        let summary = output.summary();
        stage_info!(
            Stage::Cleaner,
            "Run complete: {} rows, {} failures, {} lookups, {} cache hits",
            summary.rows,
            summary.failures,
            summary.lookups,
            summary.cache_hits
        );
        Ok(summary)
    }

    /// Turn unique records into rows, consulting and filling the cache
    pub async fn clean(&self, records: Vec<RawCompanyRecord>, cache: &mut GeocodeCache) -> CleanOutput {
        let mut output = CleanOutput::default();
        if self.config.skip_geocode {
            stage_info!(Stage::Cleaner, "Geocoding disabled, emitting rows without coordinates");
        }

        for record in records {
            let mut row = self.base_row(&record);

            if !self.config.skip_geocode {
                let query = geocode_query(&row.name, &self.config.city, &self.config.state);
                let result = self.lookup(&query, cache, &mut output).await;

                match classify(result.as_ref(), &self.config.bbox) {
                    Classification::InRegion(found) => row.place(found),
                    Classification::OutOfRegion => {
                        stage_debug!(Stage::Cleaner, "'{}' resolved outside the region", query);
                        output
                            .failures
                            .push(FailureRecord::new(&row.name, query, FailureReason::OutOfBbox));
                    }
                    Classification::NotFound => {
                        output
                            .failures
                            .push(FailureRecord::new(&row.name, query, FailureReason::NoResults));
                    }
                }
            }

            output.rows.push(row);
        }

        output
    }

    /// Resolve a query from the cache, or the geocoder followed by the delay.
    ///
    /// A transport failure counts as no result for this run and is not
    /// cached, so the query is retried on the next run.
    async fn lookup(&self, query: &str, cache: &mut GeocodeCache, output: &mut CleanOutput) -> Option<GeocodeResult> {
        if let Some(cached) = cache.get(query) {
            output.cache_hits += 1;
            return cached.cloned();
        }

        output.lookups += 1;
        let result = self.geocoder.geocode(query).await;
        tokio::time::sleep(self.config.delay).await;

        match result {
            Ok(found) => {
                cache.put(query, found.clone());
                found
            }
            Err(e) => {
                stage_warn!(Stage::Cleaner, "Geocode lookup failed for '{}': {}", query, e);
                None
            }
        }
    }

    fn base_row(&self, record: &RawCompanyRecord) -> CleanCompanyRow {
        CleanCompanyRow {
            name: record.name.trim().to_string(),
            city: self.config.city.clone(),
            state: self.config.state.clone(),
            website: clean_url(record.website.as_deref()),
            careers_url: clean_url(record.careers_url.as_deref()),
            tags: record.pipe_joined_tags(),
            ..CleanCompanyRow::default()
        }
    }
}
