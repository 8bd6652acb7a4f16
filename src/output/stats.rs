use std::fmt;
use std::time::Duration;

/// Summary statistics for a finished crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlStats {
    /// Distinct pages a fetch was dispatched for
    pub pages_visited: usize,

    /// Total outbound links recorded across all pages
    pub links_recorded: usize,

    /// Pages whose fetch failed (still present in the graph, with no links)
    pub fetch_failures: usize,

    /// Wall-clock duration of the crawl
    pub duration: Duration,
}

impl fmt::Display for CrawlStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pages visited, {} links recorded, {} failed fetches in {:.2?}",
            self.pages_visited, self.links_recorded, self.fetch_failures, self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_summary() {
        let stats = CrawlStats {
            pages_visited: 3,
            links_recorded: 7,
            fetch_failures: 1,
            duration: Duration::from_millis(1500),
        };

        let rendered = stats.to_string();
        assert!(rendered.contains("3 pages visited"));
        assert!(rendered.contains("7 links recorded"));
        assert!(rendered.contains("1 failed fetches"));
    }
}
