//! Company name normalization for duplicate detection

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{CleanerError, CleanerResult};

/// Legal-entity suffixes removed when comparing names
pub const LEGAL_SUFFIXES: &[&str] = &[
    "inc",
    "llc",
    "ltd",
    "corp",
    "corporation",
    "company",
    "co",
    "incorporated",
];

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static punctuation pattern"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static whitespace pattern"));

static DEFAULT_NORMALIZER: LazyLock<NameNormalizer> =
    LazyLock::new(|| NameNormalizer::new(LEGAL_SUFFIXES).expect("static suffix list"));

/// Maps a display name to its deduplication key.
///
/// Lowercases, replaces punctuation with spaces, collapses whitespace and
/// drops whole-word legal suffixes, so that `Acme, Inc.` and `ACME` share a
/// key while `Acmeco` does not.
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    suffixes: Option<Regex>,
}

impl NameNormalizer {
    /// Build a normalizer stripping the given whole-word suffixes
    pub fn new<S: AsRef<str>>(suffixes: &[S]) -> CleanerResult<Self> {
        let words: Vec<String> = suffixes
            .iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .map(|s| regex::escape(&s))
            .collect();

        if words.is_empty() {
            return Ok(Self { suffixes: None });
        }

        let pattern = format!(r"\b(?:{})\b", words.join("|"));
        let suffixes = Regex::new(&pattern).map_err(|e| CleanerError::ConfigError {
            message: format!("invalid suffix list: {}", e),
        })?;

        Ok(Self {
            suffixes: Some(suffixes),
        })
    }

    pub fn normalize(&self, name: &str) -> String {
        let lowered = name.to_lowercase();
        let spaced = PUNCTUATION.replace_all(&lowered, " ");
        let collapsed = collapse_whitespace(&spaced);

        match &self.suffixes {
            Some(suffixes) => collapse_whitespace(&suffixes.replace_all(&collapsed, "")),
            None => collapsed,
        }
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        DEFAULT_NORMALIZER.clone()
    }
}

/// Normalize with the default legal suffix list
pub fn normalize(name: &str) -> String {
    DEFAULT_NORMALIZER.normalize(name)
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}
