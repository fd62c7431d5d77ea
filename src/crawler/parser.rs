//! HTML parsing for fetched pages and search result pages
//!
//! This module handles:
//! - Reducing a page to its visible text (script and style content removed)
//! - Collecting organic result links from a search engine results page

use crate::url::is_http_link;
use scraper::{Html, Node, Selector};

/// Elements whose text never counts as visible page content
const INVISIBLE_ELEMENTS: [&str; 2] = ["script", "style"];

/// Converts HTML into its visible text
///
/// Text beneath `<script>` and `<style>` elements and comments is dropped;
/// the remaining text nodes are concatenated in document order without a
/// separator. If no document tree could be built, the raw input is returned
/// unchanged so extraction can still run against the markup.
///
/// # Example
///
/// ```
/// use mailsweep::crawler::normalize_html;
///
/// let html = r#"<html><head><style>p { color: red }</style></head>
/// <body><p>Mail me</p><script>var x = "hidden@example.com";</script></body></html>"#;
/// let text = normalize_html(html);
/// assert!(text.contains("Mail me"));
/// assert!(!text.contains("hidden@example.com"));
/// ```
pub fn normalize_html(html: &str) -> String {
    visible_text(html).unwrap_or_else(|| html.to_string())
}

/// Extracts the visible text of a document, or `None` if it has no tree
fn visible_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let root = document.tree.root();
    root.first_child()?;

    let mut text = String::new();
    for node in root.descendants() {
        let Node::Text(fragment) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| INVISIBLE_ELEMENTS.contains(&element.name()))
        });

        if !hidden {
            text.push_str(fragment);
        }
    }

    Some(text)
}

/// Collects result URLs from a search results page
///
/// Anchors matching `selector` are visited in document order; their `href`
/// is kept when it starts with `http://` or `https://`. Collection stops
/// once `limit` links have been gathered.
///
/// # Arguments
///
/// * `html` - The results page body
/// * `selector` - CSS selector for organic result anchors
/// * `limit` - Maximum number of URLs to return
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Result URLs in ranking order
/// * `Err(String)` - The selector could not be parsed
pub fn extract_result_links(
    html: &str,
    selector: &str,
    limit: usize,
) -> Result<Vec<String>, String> {
    let selector = Selector::parse(selector)
        .map_err(|e| format!("invalid result selector '{}': {:?}", selector, e))?;

    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for element in document.select(&selector) {
        if links.len() >= limit {
            break;
        }

        if let Some(href) = element.value().attr("href") {
            if is_http_link(href) {
                links.push(href.to_string());
            }
        }
    }

    Ok(links)
}
