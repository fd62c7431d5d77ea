//! HTTP fetcher implementation
//!
//! This module handles all page requests for the crawler, including:
//! - Building the shared HTTP client with the browser user agent and timeout
//! - GET requests to fetch page content
//! - Error classification for diagnostics

use crate::config::HttpConfig;
use async_trait::async_trait;
use reqwest::Client;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched the page
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The server answered with a 4xx or 5xx status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (DNS failure, connection refused, timeout, body read)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchOutcome {
    /// Collapses the outcome to page content; every failure is empty
    pub fn into_body(self) -> String {
        match self {
            FetchOutcome::Success { body, .. } => body,
            FetchOutcome::HttpError { .. } | FetchOutcome::NetworkError { .. } => String::new(),
        }
    }
}

/// Source of page content for the crawl
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Returns the body of `url`, or an empty string if it could not be fetched
    ///
    /// A failed fetch and an empty page are indistinguishable to callers.
    async fn fetch(&self, url: &str) -> String;
}

/// Builds the HTTP client shared by page fetches and search requests
///
/// The client keeps one connection pool and one set of default headers for
/// the whole run. Redirects are followed.
///
/// # Example
///
/// ```
/// use mailsweep::config::HttpConfig;
/// use mailsweep::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the result
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | 2xx (after redirects) | Success |
/// | 4xx / 5xx | HttpError |
/// | Timeout, DNS, connect, body read failure | NetworkError |
pub async fn fetch_url(client: &Client, url: &str) -> FetchOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                e.to_string()
            };
            return FetchOutcome::NetworkError { error };
        }
    };

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return FetchOutcome::HttpError {
            status_code: status.as_u16(),
        };
    }

    match response.text().await {
        Ok(body) => FetchOutcome::Success {
            status_code: status.as_u16(),
            body,
        },
        Err(e) => FetchOutcome::NetworkError {
            error: e.to_string(),
        },
    }
}

/// Page fetcher backed by the shared HTTP client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches a page and returns the classified outcome
    pub async fn fetch_outcome(&self, url: &str) -> FetchOutcome {
        let outcome = fetch_url(&self.client, url).await;

        match &outcome {
            FetchOutcome::Success { status_code, body } => {
                tracing::debug!("Fetched {} (HTTP {}, {} bytes)", url, status_code, body.len());
            }
            FetchOutcome::HttpError { status_code } => {
                tracing::error!("Error fetching {}: HTTP {}", url, status_code);
            }
            FetchOutcome::NetworkError { error } => {
                tracing::error!("Error fetching {}: {}", url, error);
            }
        }

        outcome
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> String {
        self.fetch_outcome(url).await.into_body()
    }
}
