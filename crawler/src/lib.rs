//! Directory crawler library
//!
//! Pages through a company directory listing, keeps the first occurrence of
//! every company identifier, and enriches each company with its detail
//! lookup. The result is the raw record artifact consumed by the cleaner.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::CrawlerConfig;
pub use crate::core::Crawler;
pub use error::{CrawlerError, CrawlerResult};
pub use traits::*;
pub use types::*;
