//! Cleaner services implementations

pub mod file_system;
pub mod geocoder;

#[cfg(test)]
pub mod tests;

pub use file_system::*;
pub use geocoder::*;
