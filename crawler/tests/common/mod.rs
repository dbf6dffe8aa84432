//! Common test utilities for crawler integration tests
//!
//! Builders for listing HTML and wiremock helpers that stand up a fake
//! directory site and API.

#![allow(dead_code)]

use std::path::PathBuf;

use crawler::CrawlerConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// One listing card with the given id, name and bullet-separated tags
pub fn card_html(company_id: &str, name: &str, tags: &[&str]) -> String {
    format!(
        r#"<div class="company-card-horizontal">
             <a class="company-card-overlay" data-company-id="{company_id}" href="/company/{company_id}"></a>
             <h2>{name}</h2>
             <div class="company-info-section"><div class="text-gray-04">{}</div></div>
           </div>"#,
        tags.join(" \u{2022} ")
    )
}

/// Full listing page wrapping the given cards
pub fn listing_page(cards: &[String]) -> String {
    format!("<html><body><main>{}</main></body></html>", cards.join("\n"))
}

/// Serve a listing page for one page number
pub async fn mount_listing_page(server: &MockServer, page: u32, html: String) {
    Mock::given(method("GET"))
        .and(path("/companies"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

/// Serve an overview payload for one company
pub async fn mount_overview(server: &MockServer, company_id: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/companies/{}/overview", company_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Crawler configuration pointing both origins at the mock server, no delay
pub fn config_for(server: &MockServer, limit: usize) -> CrawlerConfig {
    CrawlerConfig::new(
        limit,
        0.0,
        PathBuf::from("companies_raw.json"),
        &server.uri(),
        &server.uri(),
        "crawler-tests",
    )
    .expect("valid test config")
}
