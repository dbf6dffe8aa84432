//! Crawler binary entry point

use std::path::PathBuf;

use clap::Parser;

use crawler::{
    Crawler, CrawlerConfig, CrawlerResult,
    config::{DEFAULT_API_URL, DEFAULT_SITE_URL, DEFAULT_USER_AGENT},
    services::{RealDirectoryClient, write_raw_records},
};
use shared::{Stage, logging, stage_debug};

/// Crawl the company directory and write the raw JSON artifact
#[derive(Parser)]
#[command(name = "crawler")]
#[command(about = "Crawl the company directory and output raw JSON")]
struct Args {
    /// Maximum number of unique companies to collect
    #[arg(long, env = "CRAWL_LIMIT", default_value_t = 100)]
    limit: usize,

    /// Seconds to sleep after every request
    #[arg(long, env = "CRAWL_DELAY", default_value_t = 0.4)]
    delay: f64,

    /// Raw artifact path
    #[arg(long, env = "CRAWL_OUTPUT", default_value = "data/companies_raw.json")]
    output: PathBuf,

    /// Directory site origin
    #[arg(long, env = "DIRECTORY_SITE_URL", default_value = DEFAULT_SITE_URL)]
    site_url: String,

    /// Directory API origin
    #[arg(long, env = "DIRECTORY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// User-Agent header sent to the directory
    #[arg(long, env = "CRAWL_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> CrawlerResult<()> {
    let _ = dotenv::dotenv();
    let args = Args::parse();

    logging::init_tracing(Stage::Crawler, Some(&args.log_level))?;

    let config = CrawlerConfig::new(
        args.limit,
        args.delay,
        args.output,
        &args.site_url,
        &args.api_url,
        &args.user_agent,
    )?;

    logging::log_startup(Stage::Crawler, "directory crawl");
    stage_debug!(
        Stage::Crawler,
        "Limit: {}, Delay: {:?}, Site: {}, API: {}",
        config.limit,
        config.delay,
        config.site_url,
        config.api_url
    );

    let client = RealDirectoryClient::new(&config)?;
    let crawler = Crawler::new(client, config.site_url.clone());

    let companies = crawler.crawl(config.limit, config.delay).await;
    write_raw_records(&config.output, &companies).await?;

    println!("Saved {} companies to {}", companies.len(), config.output.display());
    Ok(())
}
