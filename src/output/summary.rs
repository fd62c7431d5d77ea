//! Console summary of a collection

use crate::state::CollectionResult;
use std::collections::BTreeSet;
use std::fmt;

/// Totals computed from a collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionSummary {
    /// Number of URLs that yielded at least one email
    pub urls_processed: usize,

    /// Sum of per-URL email counts; an address under two URLs counts twice
    pub total_emails: usize,

    /// Union of all emails, sorted
    pub unique_emails: BTreeSet<String>,
}

/// Computes summary totals for a collection
pub fn summarize(results: &CollectionResult) -> CollectionSummary {
    let mut summary = CollectionSummary {
        urls_processed: results.len(),
        ..CollectionSummary::default()
    };

    for (_, emails) in results.iter() {
        summary.total_emails += emails.len();
        summary.unique_emails.extend(emails.iter().cloned());
    }

    summary
}

impl fmt::Display for CollectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== EMAIL COLLECTION SUMMARY ===")?;
        writeln!(f, "URLs processed: {}", self.urls_processed)?;
        writeln!(f, "Total emails found: {}", self.total_emails)?;
        writeln!(f, "Unique emails: {}", self.unique_emails.len())?;
        writeln!(f)?;
        writeln!(f, "Unique emails list:")?;
        for email in &self.unique_emails {
            writeln!(f, "  - {}", email)?;
        }
        Ok(())
    }
}

/// Renders the console report: a blank line, then the summary
pub fn render_summary(results: &CollectionResult) -> String {
    format!("\n{}", summarize(results))
}

/// Prints the summary of a collection to stdout
pub fn print_summary(results: &CollectionResult) {
    print!("{}", render_summary(results));
}
