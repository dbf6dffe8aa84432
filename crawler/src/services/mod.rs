//! Crawler services implementations

pub mod artifact;
pub mod directory_client;

#[cfg(test)]
pub mod tests;

pub use artifact::*;
pub use directory_client::*;
