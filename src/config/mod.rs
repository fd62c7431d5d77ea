//! Configuration module for mailsweep
//!
//! Settings have built-in defaults and may be overridden by an optional
//! TOML file; command-line flags are applied on top by the binary.
//!
//! # Example
//!
//! ```no_run
//! use mailsweep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("mailsweep.toml")).unwrap();
//! println!("Per-domain cap: {}", config.crawl.max_pages_per_domain);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlConfig, DelayRange, HttpConfig, OutputConfig, SearchConfig,
    DEFAULT_OUTPUT_PATH, DEFAULT_RESULT_SELECTOR, DEFAULT_SEARCH_ENDPOINT, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::validate;
