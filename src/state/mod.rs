//! Crawl state tracking
//!
//! Per-domain visit counts and the URL to email mapping built up during a
//! single crawl. Nothing here outlives one run.

mod collection;
mod domain_counter;

pub use collection::{CollectionResult, EmailSet};
pub use domain_counter::DomainVisitCounter;
