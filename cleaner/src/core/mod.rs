//! Cleaner core business logic

pub mod cache;
pub mod dedup;
pub mod normalizer;
pub mod region;
pub mod url_clean;

pub use cache::GeocodeCache;
pub use dedup::{OrderedMap, dedupe_records};
pub use normalizer::{LEGAL_SUFFIXES, NameNormalizer, normalize};
pub use region::{BoundingBox, Classification, classify};
pub use url_clean::clean_url;
