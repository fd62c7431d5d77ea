//! Crawl coordinator - main collection loop
//!
//! This module drives one crawl from a search query to a URL to email
//! mapping:
//! - Running the search once
//! - Enforcing the per-domain page cap
//! - Pausing a random delay before every fetch
//! - Fetching, normalizing and extracting emails page by page
//!
//! Every step is awaited in sequence; pages are never fetched concurrently.

use crate::config::{Config, DelayRange};
use crate::crawler::emails::extract_emails;
use crate::crawler::fetcher::{build_http_client, HttpFetcher, PageSource};
use crate::crawler::pacer::{Pacer, TokioPacer};
use crate::crawler::parser::normalize_html;
use crate::crawler::search::{DuckDuckGoSearch, SearchProvider};
use crate::state::{CollectionResult, DomainVisitCounter, EmailSet};
use crate::url::extract_domain;
use crate::HarvestError;

/// Main crawl coordinator
///
/// Holds everything one crawl needs: the search provider, the page source
/// sharing its HTTP client, the pacer and the delay range.
pub struct Collector {
    search: Box<dyn SearchProvider>,
    pages: Box<dyn PageSource>,
    pacer: Box<dyn Pacer>,
    delay: DelayRange,
}

impl Collector {
    /// Creates a collector from its parts
    pub fn new(
        search: Box<dyn SearchProvider>,
        pages: Box<dyn PageSource>,
        pacer: Box<dyn Pacer>,
        delay: DelayRange,
    ) -> Self {
        Self {
            search,
            pages,
            pacer,
            delay,
        }
    }

    /// Creates the production collector: DuckDuckGo search and HTTP page
    /// fetches over one shared client, tokio sleeps between requests
    ///
    /// # Arguments
    ///
    /// * `config` - The collector configuration
    /// * `delay` - Delay range to sample before each fetch
    ///
    /// # Returns
    ///
    /// * `Ok(Collector)` - Ready to crawl
    /// * `Err(HarvestError)` - The HTTP client could not be built
    pub fn from_config(config: &Config, delay: DelayRange) -> Result<Self, HarvestError> {
        let client = build_http_client(&config.http)?;

        Ok(Self::new(
            Box::new(DuckDuckGoSearch::new(client.clone(), config.search.clone())),
            Box::new(HttpFetcher::new(client)),
            Box::new(TokioPacer),
            delay,
        ))
    }

    /// Collects emails from the results of one search query
    ///
    /// # Arguments
    ///
    /// * `query` - Search query
    /// * `num_results` - Number of search results to request
    /// * `max_pages_per_domain` - Maximum pages fetched from any one domain
    ///
    /// # Returns
    ///
    /// A mapping from page URL to the emails found there. Pages without
    /// emails are absent.
    pub async fn collect(
        &self,
        query: &str,
        num_results: usize,
        max_pages_per_domain: u32,
    ) -> CollectionResult {
        tracing::info!("Starting email collection for query: '{}'", query);

        let mut results = CollectionResult::new();

        let urls = self.search.search(query, num_results).await;
        if urls.is_empty() {
            tracing::warn!("No URLs found in search results");
            return results;
        }

        let mut domains = DomainVisitCounter::new(max_pages_per_domain);
        let mut skipped = 0usize;

        for url in &urls {
            let domain = extract_domain(url);

            if !domains.try_visit(&domain) {
                tracing::debug!(
                    "Skipping {}: reached {} pages for {}",
                    url,
                    domains.max_per_domain(),
                    domain
                );
                skipped += 1;
                continue;
            }
            tracing::debug!(
                "Visiting {} ({} more pages allowed for {})",
                url,
                domains.remaining(&domain),
                domain
            );

            self.pacer.pause(self.delay.sample()).await;

            let emails = self.extract_emails_from_url(url).await;
            results.record(url.as_str(), emails);
        }

        tracing::info!(
            "Collection finished: {} URLs fetched from {} domains, {} skipped, {} with emails",
            urls.len() - skipped,
            domains.domains_visited(),
            skipped,
            results.len()
        );

        results
    }

    /// Fetches one page and extracts the emails in its visible text
    async fn extract_emails_from_url(&self, url: &str) -> EmailSet {
        tracing::info!("Extracting emails from: {}", url);

        let content = self.pages.fetch(url).await;
        if content.is_empty() {
            return EmailSet::new();
        }

        let text = normalize_html(&content);
        let emails = extract_emails(&text);
        tracing::info!("Found {} emails on {}", emails.len(), url);

        emails
    }
}
