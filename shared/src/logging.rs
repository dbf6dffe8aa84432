//! Shared logging utilities for consistent tracing across both stages

use crate::errors::{SharedError, SharedResult};
use crate::types::Stage;
use chrono::{DateTime, Utc};
use tracing::info;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Build the env-filter directive for a stage at the given base level
pub fn filter_directive(stage: Stage, log_level: Option<&str>) -> SharedResult<String> {
    let base_level = log_level.unwrap_or("info").to_lowercase();
    if !LOG_LEVELS.contains(&base_level.as_str()) {
        return Err(SharedError::InvalidConfig {
            field: "log_level".to_string(),
            value: base_level,
        });
    }

    Ok(format!(
        "{target}={base_level},shared={base_level},reqwest=warn,hyper=warn",
        target = stage.target()
    ))
}

/// Initialize a compact stdout subscriber for the given stage
pub fn init_tracing(stage: Stage, log_level: Option<&str>) -> SharedResult<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let directive = filter_directive(stage, log_level)?;

    fmt()
        .with_env_filter(EnvFilter::new(&directive))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init()
        .map_err(|e| SharedError::LoggingInit {
            message: e.to_string(),
        })
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for stage-aware info logging
#[macro_export]
macro_rules! stage_info {
    ($stage:expr, $($arg:tt)*) => {
        tracing::info!(
            stage = %$stage,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for stage-aware warning logging
#[macro_export]
macro_rules! stage_warn {
    ($stage:expr, $($arg:tt)*) => {
        tracing::warn!(
            stage = %$stage,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for stage-aware error logging
#[macro_export]
macro_rules! stage_error {
    ($stage:expr, $($arg:tt)*) => {
        tracing::error!(
            stage = %$stage,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for stage-aware debug logging
#[macro_export]
macro_rules! stage_debug {
    ($stage:expr, $($arg:tt)*) => {
        tracing::debug!(
            stage = %$stage,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(stage: Stage, details: &str) {
    info!(
        stage = %stage,
        timestamp = format_timestamp(),
        "Starting {}",
        details
    );
}
