//! Unit tests for cleaner services
