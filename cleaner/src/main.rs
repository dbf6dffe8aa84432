//! Cleaner binary entry point

use std::path::PathBuf;

use clap::Parser;

use cleaner::{
    BoundingBox, CleanerConfig, CleanerResult, NameNormalizer, Pipeline,
    config::{DEFAULT_CITY, DEFAULT_GEOCODER_URL, DEFAULT_STATE, DEFAULT_USER_AGENT, parse_delay},
    services::{RealFileSystem, RealGeocoder},
};
use shared::{Stage, logging, stage_debug};

/// Deduplicate, geocode and filter the raw company artifact
#[derive(Parser)]
#[command(name = "cleaner")]
#[command(about = "Clean raw company data into a geocoded CSV")]
struct Args {
    /// Raw JSON artifact produced by the crawler
    #[arg(long, env = "CLEAN_INPUT", default_value = "data/companies_raw.json")]
    input: PathBuf,

    /// Clean CSV output
    #[arg(long, env = "CLEAN_OUTPUT", default_value = "data/companies_clean.csv")]
    output: PathBuf,

    /// Failure log CSV output
    #[arg(long, env = "CLEAN_FAILURES", default_value = "data/geocode_failures.csv")]
    failures: PathBuf,

    /// Geocode cache JSON
    #[arg(long, env = "GEOCODE_CACHE", default_value = "data/geocode_cache.json")]
    cache: PathBuf,

    /// Seconds to sleep after every geocoder call
    #[arg(long, env = "GEOCODE_DELAY", default_value_t = 1.0)]
    delay: f64,

    /// Accepted region as minLng,minLat,maxLng,maxLat
    #[arg(long, env = "GEOCODE_BBOX", default_value = "-118.7,33.7,-118.1,34.4", allow_hyphen_values = true)]
    bbox: String,

    /// Skip geocoding and emit rows without coordinates
    #[arg(long, env = "NO_GEOCODE")]
    no_geocode: bool,

    /// City appended to every geocode query and row
    #[arg(long, env = "CLEAN_CITY", default_value = DEFAULT_CITY)]
    city: String,

    /// State appended to every geocode query and row
    #[arg(long, env = "CLEAN_STATE", default_value = DEFAULT_STATE)]
    state: String,

    /// Geocoding service origin
    #[arg(long, env = "GEOCODER_URL", default_value = DEFAULT_GEOCODER_URL)]
    geocoder_url: String,

    /// Identifying User-Agent sent to the geocoder
    #[arg(long, env = "GEOCODER_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Comma-separated legal-entity suffixes ignored when deduplicating names
    #[arg(
        long,
        env = "LEGAL_SUFFIXES",
        value_delimiter = ',',
        default_value = "inc,llc,ltd,corp,corporation,company,co,incorporated"
    )]
    suffixes: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> CleanerResult<CleanerConfig> {
        CleanerConfig {
            input: self.input,
            output: self.output,
            failures: self.failures,
            cache: self.cache,
            delay: parse_delay(self.delay)?,
            bbox: self.bbox.parse::<BoundingBox>()?,
            skip_geocode: self.no_geocode,
            city: self.city,
            state: self.state,
            geocoder_url: self.geocoder_url,
            user_agent: self.user_agent,
            suffixes: self.suffixes,
        }
        .validate()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> CleanerResult<()> {
    let _ = dotenv::dotenv();
    let args = Args::parse();

    logging::init_tracing(Stage::Cleaner, Some(&args.log_level))?;

    let config = args.into_config()?;

    logging::log_startup(Stage::Cleaner, "company data cleaning");
    stage_debug!(
        Stage::Cleaner,
        "Input: {}, BBox: {}, Delay: {:?}, Geocoding: {}",
        config.input.display(),
        config.bbox,
        config.delay,
        !config.skip_geocode
    );

    let geocoder = RealGeocoder::new(&config)?;
    let normalizer = NameNormalizer::new(&config.suffixes)?;
    let pipeline = Pipeline::new(config, geocoder, RealFileSystem::new()).with_normalizer(normalizer);

    let summary = pipeline.run().await?;

    let config = pipeline.config();
    println!("Saved {} rows to {}", summary.rows, config.output.display());
    println!("Logged {} failures to {}", summary.failures, config.failures.display());
    Ok(())
}
