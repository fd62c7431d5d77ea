//! mailsweep: collect email addresses from web search results
//!
//! This crate runs a search query, fetches a bounded number of result pages
//! (at most a fixed number per domain, with a random pause before each
//! fetch), extracts email addresses from their visible text and writes the
//! URL/email pairs to a CSV file.

pub mod config;
pub mod crawler;
pub mod interactive;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for mailsweep operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for mailsweep operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, DelayRange};
pub use crawler::{collect, extract_emails, normalize_html, Collector};
pub use output::{print_summary, save_results, summarize, CollectionSummary};
pub use state::{CollectionResult, DomainVisitCounter, EmailSet};
pub use crate::url::extract_domain;
