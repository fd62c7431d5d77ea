//! Crawler module for search, page fetching and email extraction
//!
//! This module contains the core collection logic, including:
//! - Querying the search engine for result URLs
//! - HTTP fetching with a shared client
//! - HTML to text normalization
//! - Email pattern matching
//! - Per-domain limiting and pacing in the collection loop

mod coordinator;
mod emails;
mod fetcher;
mod pacer;
mod parser;
mod search;

pub use coordinator::Collector;
pub use emails::{extract_emails, EMAIL_PATTERN};
pub use fetcher::{build_http_client, fetch_url, FetchOutcome, HttpFetcher, PageSource};
pub use pacer::{Pacer, TokioPacer};
pub use parser::{extract_result_links, normalize_html};
pub use search::{DuckDuckGoSearch, SearchProvider};

use crate::config::{Config, DelayRange};
use crate::state::CollectionResult;
use crate::HarvestError;

/// Runs a complete collection with the production collector
///
/// # Arguments
///
/// * `config` - HTTP and search settings
/// * `query` - Search query
/// * `num_results` - Number of search results to request
/// * `max_pages_per_domain` - Per-domain page cap
/// * `delay` - Delay range sampled before each fetch
///
/// # Returns
///
/// * `Ok(CollectionResult)` - The URL to email mapping (possibly empty)
/// * `Err(HarvestError)` - The HTTP client could not be built
pub async fn collect(
    config: &Config,
    query: &str,
    num_results: usize,
    max_pages_per_domain: u32,
    delay: DelayRange,
) -> Result<CollectionResult, HarvestError> {
    let collector = Collector::from_config(config, delay)?;
    Ok(collector
        .collect(query, num_results, max_pages_per_domain)
        .await)
}
