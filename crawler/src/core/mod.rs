//! Crawler core business logic

pub mod cards;
pub mod crawler;

pub use cards::parse_company_cards;
pub use crawler::Crawler;
