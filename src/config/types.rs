use std::path::PathBuf;
use std::time::Duration;

/// Immutable crawl configuration, set once at startup
///
/// Built from command-line arguments and validated before the engine is
/// constructed; read-only thereafter.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// The starting URL, including scheme (e.g. `https://example.com`)
    pub start_url: String,

    /// Maximum link depth to crawl from the starting URL
    pub max_depth: u32,

    /// Number of concurrently outstanding fetch workers
    pub concurrency: usize,

    /// Per-request fetch timeout
    pub fetch_timeout: Duration,

    /// Where the resulting URL graph is written
    pub output_path: PathBuf,
}

impl CrawlConfig {
    /// Creates a configuration with the default depth, concurrency, timeout
    /// and output location for the given starting URL.
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            start_url: start_url.into(),
            max_depth: 1,
            concurrency: 10,
            fetch_timeout: Duration::from_secs(10),
            output_path: PathBuf::from("url_graph.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::new("https://example.com");
        assert_eq!(config.start_url, "https://example.com");
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.concurrency, 10);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.output_path, PathBuf::from("url_graph.json"));
    }
}
