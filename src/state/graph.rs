use serde::Serialize;
use std::collections::HashMap;

/// The URL graph produced by a crawl
///
/// Maps each visited in-domain URL to the ordered list of normalized
/// outbound URLs found on that page. Both in-domain and out-of-domain links
/// appear in the per-page lists; only in-domain links become keys of their
/// own. A page whose fetch failed is present with an empty list.
///
/// Serializes transparently as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UrlGraph {
    pages: HashMap<String, Vec<String>>,
}

impl UrlGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outbound links of a page. Each page is written once, by
    /// the worker that claimed its URL.
    pub fn insert(&mut self, url: impl Into<String>, outbound: Vec<String>) {
        self.pages.insert(url.into(), outbound);
    }

    pub fn contains(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    /// The outbound links recorded for a page, if it was visited.
    pub fn outbound(&self, url: &str) -> Option<&[String]> {
        self.pages.get(url).map(|links| links.as_slice())
    }

    /// Number of visited pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of recorded outbound links across all pages.
    pub fn link_count(&self) -> usize {
        self.pages.values().map(|links| links.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut graph = UrlGraph::new();
        graph.insert(
            "https://example.com",
            vec!["https://example.com/a".to_string()],
        );

        assert!(graph.contains("https://example.com"));
        assert_eq!(
            graph.outbound("https://example.com"),
            Some(&["https://example.com/a".to_string()][..])
        );
        assert_eq!(graph.outbound("https://example.com/missing"), None);
    }

    #[test]
    fn test_counts() {
        let mut graph = UrlGraph::new();
        assert!(graph.is_empty());

        graph.insert(
            "https://example.com",
            vec![
                "https://example.com/a".to_string(),
                "https://other.com".to_string(),
            ],
        );
        graph.insert("https://example.com/a", vec![]);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.link_count(), 2);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut graph = UrlGraph::new();
        graph.insert(
            "https://example.com",
            vec!["https://example.com/a".to_string()],
        );

        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "https://example.com": ["https://example.com/a"]
            })
        );
    }
}
