//! Core types used by both pipeline stages

use std::fmt;

pub mod company;

pub use company::*;

/// Pipeline stage a process is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Directory crawl producing the raw artifact
    Crawler,
    /// Dedup + geocode producing the clean dataset
    Cleaner,
}

impl Stage {
    /// Crate name used as the tracing target for this stage
    pub fn target(&self) -> &'static str {
        match self {
            Stage::Crawler => "crawler",
            Stage::Cleaner => "cleaner",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target())
    }
}
