//! Tests for crawler services
//!
//! The directory client is exercised against a local wiremock server; the
//! artifact writer against a temporary directory.
