//! Search engine querying
//!
//! One GET against an HTML results page per query; result links are read
//! from the anchors marked as organic results.

use crate::config::SearchConfig;
use crate::crawler::parser::extract_result_links;
use crate::HarvestError;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Produces result URLs for a query
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Returns at most `limit` result URLs in ranking order
    ///
    /// Failures are logged and reported as an empty list, the same as a
    /// query with no results.
    async fn search(&self, query: &str, limit: usize) -> Vec<String>;
}

/// DuckDuckGo HTML results page search
#[derive(Debug, Clone)]
pub struct DuckDuckGoSearch {
    client: Client,
    config: SearchConfig,
}

impl DuckDuckGoSearch {
    pub fn new(client: Client, config: SearchConfig) -> Self {
        Self { client, config }
    }

    /// Builds the results page URL with the query as the `q` parameter
    pub fn search_url(&self, query: &str) -> Result<Url, HarvestError> {
        Ok(Url::parse_with_params(&self.config.endpoint, &[("q", query)])?)
    }

    /// Runs the query, propagating request and parse failures
    pub async fn try_search(&self, query: &str, limit: usize) -> Result<Vec<String>, HarvestError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let search_url = self.search_url(query)?;
        tracing::debug!("Querying {}", search_url);

        let response = self
            .client
            .get(search_url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| HarvestError::Http {
                url: search_url.to_string(),
                source,
            })?;

        let body = response.text().await.map_err(|source| HarvestError::Http {
            url: search_url.to_string(),
            source,
        })?;

        extract_result_links(&body, &self.config.result_selector, limit).map_err(|message| {
            HarvestError::HtmlParse {
                url: search_url.to_string(),
                message,
            }
        })
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoSearch {
    async fn search(&self, query: &str, limit: usize) -> Vec<String> {
        match self.try_search(query, limit).await {
            Ok(urls) => {
                tracing::debug!("Search for '{}' returned {} URLs", query, urls.len());
                urls
            }
            Err(e) => {
                tracing::error!("Error searching DuckDuckGo: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;
    use crate::crawler::build_http_client;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> DuckDuckGoSearch {
        let config = SearchConfig {
            endpoint: format!("{}/html/", server.uri()),
            ..SearchConfig::default()
        };
        DuckDuckGoSearch::new(build_http_client(&HttpConfig::default()).unwrap(), config)
    }

    fn results_page(hrefs: &[&str]) -> String {
        let anchors: String = hrefs
            .iter()
            .map(|href| format!(r#"<div class="result"><a class="result__url" href="{}">r</a></div>"#, href))
            .collect();
        format!("<html><body>{}</body></html>", anchors)
    }

    #[test]
    fn test_search_url_encodes_query() {
        let provider = DuckDuckGoSearch::new(
            build_http_client(&HttpConfig::default()).unwrap(),
            SearchConfig::default(),
        );
        let url = provider.search_url("rust jobs & more").unwrap();
        assert_eq!(url.host_str(), Some("duckduckgo.com"));
        assert_eq!(url.path(), "/html/");
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "q");
        assert_eq!(value, "rust jobs & more");
    }

    #[tokio::test]
    async fn test_search_returns_result_links() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/html/"))
            .and(query_param("q", "plumbers"))
            .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&[
                "https://a.com/",
                "//duckduckgo.com/l/?uddg=x",
                "http://b.com/contact",
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let urls = provider_for(&server).search("plumbers", 10).await;
        assert_eq!(urls, vec!["https://a.com/", "http://b.com/contact"]);
    }

    #[tokio::test]
    async fn test_search_stops_at_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&[
                "https://a.com/",
                "https://b.com/",
                "https://c.com/",
            ])))
            .mount(&server)
            .await;

        let urls = provider_for(&server).search("q", 2).await;
        assert_eq!(urls.len(), 2);
    }

    #[tokio::test]
    async fn test_search_error_status_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        assert!(provider.search("q", 10).await.is_empty());
        assert!(matches!(
            provider.try_search("q", 10).await,
            Err(HarvestError::Http { .. })
        ));
    }

    #[tokio::test]
    async fn test_search_unreachable_is_empty() {
        let config = SearchConfig {
            endpoint: "http://127.0.0.1:9/html/".to_string(),
            ..SearchConfig::default()
        };
        let provider =
            DuckDuckGoSearch::new(build_http_client(&HttpConfig::default()).unwrap(), config);
        assert!(provider.search("q", 10).await.is_empty());
    }

    #[tokio::test]
    async fn test_zero_limit_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        assert!(provider_for(&server).search("q", 0).await.is_empty());
    }
}
