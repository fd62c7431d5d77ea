//! Output module for collection results
//!
//! This module handles:
//! - Writing the URL/email pairs to a CSV file
//! - Computing and printing the collection summary

mod csv_output;
pub mod summary;

pub use csv_output::{save_results, write_results, CSV_HEADER};
pub use summary::{print_summary, render_summary, summarize, CollectionSummary};
