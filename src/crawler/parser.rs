//! Link extraction from raw HTML
//!
//! Pulls the raw `href`/`src` attribute values out of anchor, link, script,
//! and image elements. Nothing is filtered here: off-domain, malformed, and
//! non-HTTP links all pass through, because filtering is the traversal
//! engine's job via the URL normalizer.

use scraper::{Html, Selector};

/// Element names whose `href`/`src` attributes are harvested, in the order
/// their matches appear in the result.
const LINK_TAGS: &[&str] = &["a", "link", "script", "img"];

/// Extracts every candidate link string from an HTML document
///
/// Returns the raw attribute values grouped by element kind (all anchors
/// first, then `link`, `script`, `img`), each group in document order. For
/// each element, `href` is read first, falling back to `src`. Content with
/// no such elements, including non-HTML garbage, yields an empty list
/// rather than an error.
///
/// # Examples
///
/// ```
/// use linkmap::crawler::extract_links;
///
/// let html = r#"<a href="/page2">two</a><img src="/logo.png">"#;
/// assert_eq!(extract_links(html), vec!["/page2", "/logo.png"]);
/// ```
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for tag in LINK_TAGS {
        let Ok(selector) = Selector::parse(tag) else {
            continue;
        };

        for element in document.select(&selector) {
            let value = element
                .value()
                .attr("href")
                .or_else(|| element.value().attr("src"));

            if let Some(value) = value {
                links.push(value.to_string());
            }
        }
    }

    links
}
