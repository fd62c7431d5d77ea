use std::collections::BTreeSet;

/// Distinct email addresses found on one page
pub type EmailSet = BTreeSet<String>;

/// Emails collected during a crawl, keyed by page URL
///
/// Entries keep the order in which URLs were processed. Only pages that
/// yielded at least one email are stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionResult {
    entries: Vec<(String, EmailSet)>,
}

impl CollectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the emails found on a page
    ///
    /// An empty set is ignored. Recording a URL that is already present
    /// replaces its set in place.
    pub fn record(&mut self, url: impl Into<String>, emails: EmailSet) {
        if emails.is_empty() {
            return;
        }

        let url = url.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == url) {
            Some((_, slot)) => *slot = emails,
            None => self.entries.push((url, emails)),
        }
    }

    pub fn get(&self, url: &str) -> Option<&EmailSet> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == url)
            .map(|(_, emails)| emails)
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.get(url).is_some()
    }

    /// Iterates `(url, emails)` pairs in processing order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EmailSet)> {
        self.entries
            .iter()
            .map(|(url, emails)| (url.as_str(), emails))
    }

    /// Iterates every `(url, email)` pair, URL order first
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .flat_map(|(url, emails)| emails.iter().map(move |email| (url, email.as_str())))
    }

    /// Number of URLs with at least one email
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
