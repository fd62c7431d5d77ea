use crate::config::types::{Config, CrawlConfig, HttpConfig, OutputConfig, SearchConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawl)?;
    validate_http_config(&config.http)?;
    validate_search_config(&config.search)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawl limits and the delay range
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.results < 1 {
        return Err(ConfigError::Validation(format!(
            "results must be >= 1, got {}",
            config.results
        )));
    }

    if config.max_pages_per_domain < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages_per_domain must be >= 1, got {}",
            config.max_pages_per_domain
        )));
    }

    config.delay_range()?;

    Ok(())
}

/// Validates HTTP client settings
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates the search endpoint and result selector
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    let endpoint = Url::parse(&config.endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid search endpoint: {}", e)))?;

    if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Search endpoint must use http or https, got '{}'",
            endpoint.scheme()
        )));
    }

    if Selector::parse(&config.result_selector).is_err() {
        return Err(ConfigError::Validation(format!(
            "result_selector is not a valid CSS selector: '{}'",
            config.result_selector
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
