use crate::ConfigError;
use serde::Deserialize;
use std::time::Duration;

/// Browser-identifying user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTML results endpoint queried with a `q` parameter
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://duckduckgo.com/html/";

/// CSS selector for organic result links on the results page
pub const DEFAULT_RESULT_SELECTOR: &str = "a.result__url";

/// Default CSV output path
pub const DEFAULT_OUTPUT_PATH: &str = "collected_emails.csv";

/// Main configuration structure for mailsweep
///
/// Every section is optional in the TOML file; missing values fall back to
/// the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub http: HttpConfig,
    pub search: SearchConfig,
    pub output: OutputConfig,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Number of search results to request
    pub results: usize,

    /// Maximum number of pages fetched per domain
    #[serde(rename = "max-pages-per-domain")]
    pub max_pages_per_domain: u32,

    /// Lower bound of the random delay before each fetch (seconds)
    #[serde(rename = "delay-min")]
    pub delay_min: f64,

    /// Upper bound of the random delay before each fetch (seconds)
    #[serde(rename = "delay-max")]
    pub delay_max: f64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            results: 10,
            max_pages_per_domain: 3,
            delay_min: 1.0,
            delay_max: 3.0,
        }
    }
}

impl CrawlConfig {
    /// Returns the configured delay bounds as a validated range
    pub fn delay_range(&self) -> Result<DelayRange, ConfigError> {
        DelayRange::new(self.delay_min, self.delay_max)
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Search engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Results page URL; the query is appended as `q`
    pub endpoint: String,

    /// CSS selector matching organic result anchors
    #[serde(rename = "result-selector")]
    pub result_selector: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            result_selector: DEFAULT_RESULT_SELECTOR.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV results file
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

/// Inclusive range of seconds to wait before each page fetch
///
/// Invariant: `0 <= min <= max`, both finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayRange {
    min: f64,
    max: f64,
}

impl DelayRange {
    /// Creates a delay range, rejecting negative, non-finite, inverted or
    /// oversized bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use mailsweep::config::DelayRange;
    ///
    /// let range = DelayRange::new(1.0, 3.0).unwrap();
    /// assert_eq!(range.min(), 1.0);
    /// assert!(DelayRange::new(3.0, 1.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::Validation(format!(
                "delay bounds must be finite numbers, got {}-{}",
                min, max
            )));
        }

        if min < 0.0 || max < 0.0 {
            return Err(ConfigError::Validation(format!(
                "delay bounds must be non-negative, got {}-{}",
                min, max
            )));
        }

        if min > max {
            return Err(ConfigError::Validation(format!(
                "minimum delay {} exceeds maximum delay {}",
                min, max
            )));
        }

        if Duration::try_from_secs_f64(max).is_err() {
            return Err(ConfigError::Validation(format!(
                "maximum delay {} is too large",
                max
            )));
        }

        Ok(Self { min, max })
    }

    /// A fixed delay with equal bounds
    pub fn fixed(seconds: f64) -> Result<Self, ConfigError> {
        Self::new(seconds, seconds)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Draws one delay uniformly from `[min, max]`
    pub fn sample(&self) -> Duration {
        let seconds = if self.min == self.max {
            self.min
        } else {
            rand::random_range(self.min..=self.max)
        };
        Duration::from_secs_f64(seconds)
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self { min: 1.0, max: 3.0 }
    }
}

impl std::fmt::Display for DelayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}-{:?}", self.min, self.max)
    }
}
