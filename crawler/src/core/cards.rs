//! Listing page parsing
//!
//! Pure HTML → `CompanyCard` extraction. Cards without a company identifier
//! or a display name are skipped rather than reported.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::types::CompanyCard;

/// Separator between tags in a card's info line
const TAG_SEPARATOR: char = '\u{2022}';

static CARD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".company-card-horizontal").expect("static selector"));
static OVERLAY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.company-card-overlay").expect("static selector"));
static NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("static selector"));
static TAGS_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".company-info-section .text-gray-04").expect("static selector")
});

/// Parse every well-formed company card on a listing page.
///
/// `page_url` is the URL the page was fetched from; relative profile links are
/// resolved against it.
pub fn parse_company_cards(html: &str, page_url: &str) -> Vec<CompanyCard> {
    let document = Html::parse_document(html);
    let base = Url::parse(page_url).ok();

    document
        .select(&CARD_SELECTOR)
        .filter_map(|card| parse_card(card, base.as_ref()))
        .collect()
}

fn parse_card(card: ElementRef<'_>, base: Option<&Url>) -> Option<CompanyCard> {
    let overlay = card.select(&OVERLAY_SELECTOR).next()?;

    let company_id = overlay
        .value()
        .attr("data-company-id")
        .map(str::trim)
        .filter(|id| !id.is_empty())?;

    let name = card
        .select(&NAME_SELECTOR)
        .next()
        .map(|heading| stripped_text(heading, ""))
        .filter(|name| !name.is_empty())?;

    let profile_url = overlay
        .value()
        .attr("href")
        .filter(|href| !href.is_empty())
        .map(|href| resolve_href(base, href));

    let tags = card
        .select(&TAGS_SELECTOR)
        .next()
        .map(|info| split_tags(&stripped_text(info, " ")))
        .unwrap_or_default();

    Some(CompanyCard {
        company_id: company_id.to_string(),
        name,
        profile_url,
        tags,
    })
}

/// Text nodes trimmed, empties dropped, joined with `separator`
fn stripped_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn split_tags(text: &str) -> Vec<String> {
    text.split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn resolve_href(base: Option<&Url>, href: &str) -> String {
    match base.and_then(|base| base.join(href).ok()) {
        Some(resolved) => resolved.to_string(),
        None => href.to_string(),
    }
}
