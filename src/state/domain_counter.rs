use std::collections::HashMap;

/// Per-domain page visit accounting for a single crawl
///
/// Counts how many pages have been fetched from each domain and refuses
/// further visits once a domain reaches the cap. A count never exceeds the
/// cap.
#[derive(Debug, Clone)]
pub struct DomainVisitCounter {
    /// Maximum number of visits allowed per domain
    max_per_domain: u32,

    /// Visits made so far, keyed by domain
    visits: HashMap<String, u32>,
}

impl DomainVisitCounter {
    /// Creates an empty counter with the given per-domain cap
    pub fn new(max_per_domain: u32) -> Self {
        Self {
            max_per_domain,
            visits: HashMap::new(),
        }
    }

    /// Checks if another page may be fetched from this domain
    pub fn can_visit(&self, domain: &str) -> bool {
        self.visit_count(domain) < self.max_per_domain
    }

    /// Records a visit if the domain is under its cap
    ///
    /// # Returns
    ///
    /// * `true` - The visit was counted and the page should be fetched
    /// * `false` - The domain is at its cap; nothing was recorded
    pub fn try_visit(&mut self, domain: &str) -> bool {
        if !self.can_visit(domain) {
            return false;
        }

        *self.visits.entry(domain.to_string()).or_insert(0) += 1;
        true
    }

    /// Number of visits recorded for a domain
    pub fn visit_count(&self, domain: &str) -> u32 {
        self.visits.get(domain).copied().unwrap_or(0)
    }

    /// Returns the number of visits remaining for this domain
    pub fn remaining(&self, domain: &str) -> u32 {
        self.max_per_domain.saturating_sub(self.visit_count(domain))
    }

    /// Number of distinct domains visited at least once
    pub fn domains_visited(&self) -> usize {
        self.visits.len()
    }

    pub fn max_per_domain(&self) -> u32 {
        self.max_per_domain
    }
}
