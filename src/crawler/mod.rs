//! Crawler module: page fetching, link extraction, and the traversal engine
//!
//! The engine coordinates everything; the fetcher and parser are its
//! collaborators. See [`engine`] for the core state machine.

mod engine;
mod fetcher;
mod parser;

pub use engine::{CrawlOutcome, Engine, FrontierEntry};
pub use fetcher::{build_http_client, HttpFetcher, PageFetcher};
pub use parser::extract_links;

use crate::config::CrawlConfig;
use crate::LinkmapError;

/// Runs a complete crawl with the default HTTP fetcher
///
/// # Example
///
/// ```no_run
/// use linkmap::config::CrawlConfig;
/// use linkmap::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CrawlConfig::new("https://example.com");
/// let outcome = run_crawl(config).await?;
/// println!("visited {} pages", outcome.graph.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: CrawlConfig) -> Result<CrawlOutcome, LinkmapError> {
    Engine::new(config)?.run().await
}
