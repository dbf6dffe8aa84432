//! Paginated directory crawl with per-company enrichment

use std::collections::HashSet;
use std::time::Duration;

use shared::{RawCompanyRecord, Stage, stage_debug, stage_info, stage_warn};

use crate::error::CrawlerResult;
use crate::traits::DirectoryClient;
use crate::types::{CompanyCard, SOURCE_TAG, careers_url};

/// Directory crawler with an injected client
pub struct Crawler<D>
where
    D: DirectoryClient,
{
    client: D,
    site_url: String,
}

impl<D> Crawler<D>
where
    D: DirectoryClient,
{
    /// Create a crawler; `site_url` is used to derive careers links
    pub fn new(client: D, site_url: impl Into<String>) -> Self {
        Self {
            client,
            site_url: site_url.into(),
        }
    }

    /// Collect up to `limit` unique companies and enrich each one.
    ///
    /// Best effort: a failed page ends pagination and a failed enrichment ends
    /// the crawl, returning whatever was gathered. `delay` is slept after every
    /// listing page that produced cards and after every enrichment call.
    pub async fn crawl(&self, limit: usize, delay: Duration) -> Vec<RawCompanyRecord> {
        let cards = self.collect_cards(limit, delay).await;
        stage_info!(Stage::Crawler, "Collected {} unique companies, enriching", cards.len());

        let mut records = Vec::with_capacity(cards.len());
        for card in cards {
            let company_id = card.company_id.clone();
            match self.enrich(card).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    stage_warn!(
                        Stage::Crawler,
                        "Enrichment failed for company {}, stopping crawl: {}",
                        company_id,
                        e
                    );
                    break;
                }
            }
            tokio::time::sleep(delay).await;
        }

        records
    }

    /// Page forward from page 1 accumulating cards in discovery order
    pub async fn collect_cards(&self, limit: usize, delay: Duration) -> Vec<CompanyCard> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut cards: Vec<CompanyCard> = Vec::new();
        let mut page: u32 = 1;

        while cards.len() < limit {
            let page_cards = match self.client.list_page(page).await {
                Ok(page_cards) => page_cards,
                Err(e) => {
                    stage_warn!(Stage::Crawler, "Listing page {} failed, ending crawl: {}", page, e);
                    break;
                }
            };

            if page_cards.is_empty() {
                stage_info!(Stage::Crawler, "Listing page {} is empty, end of directory", page);
                break;
            }

            let found = page_cards.len();
            let before = cards.len();
            for card in page_cards {
                if !seen.insert(card.company_id.clone()) {
                    continue;
                }
                cards.push(card);
                if cards.len() >= limit {
                    break;
                }
            }
            if cards.len() == before {
                stage_warn!(Stage::Crawler, "Listing page {} added no new companies", page);
            }
            stage_debug!(
                Stage::Crawler,
                "Page {}: {} cards, {} unique so far",
                page,
                found,
                cards.len()
            );

            page += 1;
            tokio::time::sleep(delay).await;
        }

        cards
    }

    /// Attach detail-endpoint data to a summary card.
    ///
    /// Industries from the detail payload replace the card's own tags when
    /// present and non-empty.
    pub async fn enrich(&self, card: CompanyCard) -> CrawlerResult<RawCompanyRecord> {
        let overview = self.client.fetch_overview(&card.company_id).await?;

        let industries = overview.industries.unwrap_or_default();
        let tags = if industries.is_empty() { card.tags } else { industries };

        Ok(RawCompanyRecord {
            careers_url: Some(careers_url(&self.site_url, &card.company_id)),
            id: card.company_id,
            name: card.name,
            profile_url: card.profile_url,
            tags: tags.into(),
            website: overview.url,
            source: Some(SOURCE_TAG.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CrawlerError;
    use crate::traits::MockDirectoryClient;
    use crate::types::CompanyOverview;
    use mockall::predicate::eq;

    const SITE: &str = "https://www.builtinla.com";

    fn card(id: &str, name: &str) -> CompanyCard {
        CompanyCard {
            company_id: id.to_string(),
            name: name.to_string(),
            profile_url: Some(format!("{}/company/{}", SITE, id)),
            tags: vec!["Software".to_string()],
        }
    }

    fn overview(url: &str, industries: &[&str]) -> CompanyOverview {
        CompanyOverview {
            url: Some(url.to_string()),
            industries: Some(industries.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[tokio::test]
    async fn test_enrich_prefers_industries() {
        let mut client = MockDirectoryClient::new();
        client
            .expect_fetch_overview()
            .with(eq("7"))
            .times(1)
            .returning(|_| Ok(overview("https://acme.com", &["Fintech", "AI"])));

        let crawler = Crawler::new(client, SITE);
        let record = crawler.enrich(card("7", "Acme")).await.unwrap();

        assert_eq!(record.id, "7");
        assert_eq!(record.tags, vec!["Fintech".to_string(), "AI".to_string()]);
        assert_eq!(record.website.as_deref(), Some("https://acme.com"));
        assert_eq!(
            record.careers_url.as_deref(),
            Some("https://www.builtinla.com/jobs?companyId=7")
        );
        assert_eq!(record.source.as_deref(), Some(SOURCE_TAG));
    }

    #[tokio::test]
    async fn test_enrich_falls_back_to_card_tags() {
        let mut client = MockDirectoryClient::new();
        client
            .expect_fetch_overview()
            .returning(|_| Ok(CompanyOverview::default()));

        let crawler = Crawler::new(client, SITE);
        let record = crawler.enrich(card("8", "Beta")).await.unwrap();

        assert_eq!(record.tags, vec!["Software".to_string()]);
        assert_eq!(record.website, None);
    }

    #[tokio::test]
    async fn test_collect_dedupes_across_pages_and_stops_on_empty_page() {
        let mut client = MockDirectoryClient::new();
        client
            .expect_list_page()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(vec![card("1", "A"), card("2", "B")]));
        client
            .expect_list_page()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(vec![card("2", "B again"), card("3", "C")]));
        client
            .expect_list_page()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(vec![]));

        let crawler = Crawler::new(client, SITE);
        let cards = crawler.collect_cards(10, Duration::ZERO).await;

        let ids: Vec<&str> = cards.iter().map(|c| c.company_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(cards[1].name, "B");
    }

    #[tokio::test]
    async fn test_collect_continues_past_page_of_known_ids() {
        let mut client = MockDirectoryClient::new();
        client
            .expect_list_page()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(vec![card("1", "A"), card("2", "B")]));
        client
            .expect_list_page()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(vec![card("1", "A"), card("2", "B")]));
        client
            .expect_list_page()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(vec![card("3", "C")]));
        client
            .expect_list_page()
            .with(eq(4))
            .times(1)
            .returning(|_| Ok(vec![]));

        let crawler = Crawler::new(client, SITE);
        let cards = crawler.collect_cards(10, Duration::ZERO).await;

        let ids: Vec<&str> = cards.iter().map(|c| c.company_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_collect_stops_at_limit_mid_page() {
        let mut client = MockDirectoryClient::new();
        client
            .expect_list_page()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(vec![card("1", "A"), card("2", "B"), card("3", "C")]));

        let crawler = Crawler::new(client, SITE);
        let cards = crawler.collect_cards(2, Duration::ZERO).await;

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].company_id, "2");
    }

    #[tokio::test]
    async fn test_zero_limit_makes_no_requests() {
        let client = MockDirectoryClient::new();
        let crawler = Crawler::new(client, SITE);

        assert!(crawler.crawl(0, Duration::ZERO).await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_page_truncates_crawl() {
        let mut client = MockDirectoryClient::new();
        client
            .expect_list_page()
            .with(eq(1))
            .returning(|_| Ok(vec![card("1", "A")]));
        client.expect_list_page().with(eq(2)).returning(|_| {
            Err(CrawlerError::StatusError {
                url: "page 2".to_string(),
                status: 503,
            })
        });
        client
            .expect_fetch_overview()
            .returning(|_| Ok(CompanyOverview::default()));

        let crawler = Crawler::new(client, SITE);
        let records = crawler.crawl(5, Duration::ZERO).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "A");
    }

    #[tokio::test]
    async fn test_failed_enrichment_returns_records_so_far() {
        let mut client = MockDirectoryClient::new();
        client
            .expect_list_page()
            .with(eq(1))
            .returning(|_| Ok(vec![card("1", "A"), card("2", "B"), card("3", "C")]));
        client
            .expect_fetch_overview()
            .with(eq("1"))
            .returning(|_| Ok(CompanyOverview::default()));
        client.expect_fetch_overview().with(eq("2")).returning(|id| {
            Err(CrawlerError::HttpError {
                url: id.to_string(),
                message: "connection reset".to_string(),
            })
        });
        client.expect_fetch_overview().with(eq("3")).times(0);

        let crawler = Crawler::new(client, SITE);
        let records = crawler.crawl(3, Duration::ZERO).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_after_each_request() {
        let mut client = MockDirectoryClient::new();
        client
            .expect_list_page()
            .with(eq(1))
            .returning(|_| Ok(vec![card("1", "A"), card("2", "B")]));
        client
            .expect_fetch_overview()
            .times(2)
            .returning(|_| Ok(CompanyOverview::default()));

        let crawler = Crawler::new(client, SITE);
        let start = tokio::time::Instant::now();
        let records = crawler.crawl(2, Duration::from_secs(1)).await;

        assert_eq!(records.len(), 2);
        // one listing page + two enrichments
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }
}
