//! The concurrent traversal engine
//!
//! This module contains the crawl's core state machine:
//! - the frontier queue of (URL, depth) pairs awaiting dispatch
//! - the atomic claim that guarantees each URL is fetched at most once
//! - a semaphore-bounded pool of fetch workers harvested through a JoinSet
//! - termination when the frontier is empty and no worker is outstanding
//!
//! Per URL the lifecycle is unseen -> dispatched -> visited. "Unseen" is
//! absence from the visited set, "dispatched" lasts while a worker holds the
//! claim, and "visited" is terminal: the URL owns a graph entry, empty if
//! its fetch failed.

use crate::config::{validate, CrawlConfig};
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::parser::extract_links;
use crate::output::CrawlStats;
use crate::state::CrawlStore;
use crate::url::{is_within_domain, normalize_link};
use crate::{LinkmapError, UrlGraph};
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// A unit of pending work: a URL awaiting fetch, and the depth at which it
/// was discovered. Consumed exactly once at dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub url: String,
    pub depth: u32,
}

/// The result of a finished crawl
#[derive(Debug)]
pub struct CrawlOutcome {
    pub graph: UrlGraph,
    pub stats: CrawlStats,
}

/// The traversal engine
///
/// Owns the frontier and dispatches fetch-and-extract work across a bounded
/// pool of concurrent workers. The visited set and the growing graph live in
/// a single mutex-guarded [`CrawlStore`] shared with the workers; locks are
/// held only for map operations, never across an await.
pub struct Engine {
    config: CrawlConfig,
    base: Url,
    fetcher: Arc<dyn PageFetcher>,
    store: Arc<Mutex<CrawlStore>>,
    semaphore: Arc<Semaphore>,
}

impl Engine {
    /// Creates an engine with the default HTTP fetcher
    ///
    /// # Arguments
    ///
    /// * `config` - The validated-on-entry crawl configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Engine)` - Ready to run
    /// * `Err(LinkmapError)` - Invalid configuration or client build failure
    pub fn new(config: CrawlConfig) -> Result<Self, LinkmapError> {
        let fetcher = HttpFetcher::new(config.fetch_timeout)?;
        Self::with_fetcher(config, Arc::new(fetcher))
    }

    /// Creates an engine with a caller-supplied page fetcher
    pub fn with_fetcher(
        config: CrawlConfig,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Result<Self, LinkmapError> {
        validate(&config)?;
        let base = Url::parse(&config.start_url)?;
        let semaphore = Arc::new(Semaphore::new(config.concurrency));

        Ok(Self {
            config,
            base,
            fetcher,
            store: Arc::new(Mutex::new(CrawlStore::new())),
            semaphore,
        })
    }

    /// Runs the crawl to completion
    ///
    /// Seeds the frontier with the normalized starting URL at depth 0, then
    /// alternates between dispatching ready frontier entries and harvesting
    /// finished workers until both the frontier and the worker set are
    /// empty. Per-URL fetch failures are contained in their worker; only
    /// configuration and worker-pool failures surface here.
    pub async fn run(self) -> Result<CrawlOutcome, LinkmapError> {
        let started = Instant::now();

        let seed = normalize_link(&self.base, self.base.as_str())?;
        tracing::info!(
            start = %seed,
            max_depth = self.config.max_depth,
            concurrency = self.config.concurrency,
            "starting crawl"
        );

        let mut frontier: VecDeque<FrontierEntry> = VecDeque::new();
        frontier.push_back(FrontierEntry { url: seed, depth: 0 });

        let mut workers: JoinSet<Vec<FrontierEntry>> = JoinSet::new();

        while !frontier.is_empty() || !workers.is_empty() {
            // Dispatch every ready entry, waiting on a permit whenever all
            // worker slots are busy.
            while let Some(entry) = frontier.pop_front() {
                if entry.depth > self.config.max_depth {
                    tracing::debug!(url = %entry.url, depth = entry.depth, "beyond depth limit");
                    continue;
                }

                // Atomic test-and-set on the visited set. This is the only
                // gate against double fetches; entries that lose the race
                // are discarded here.
                if !self.store.lock().unwrap().claim(&entry.url) {
                    continue;
                }

                let permit = self
                    .semaphore
                    .clone()
                    .acquire_owned()
                    .await
                    .map_err(|e| LinkmapError::WorkerPool(e.to_string()))?;

                let fetcher = Arc::clone(&self.fetcher);
                let store = Arc::clone(&self.store);
                let base = self.base.clone();

                workers.spawn(async move {
                    let _permit = permit;
                    process_page(fetcher.as_ref(), &store, &base, entry).await
                });
            }

            // Harvest one finished worker and merge its children into the
            // frontier before dispatching again.
            if let Some(joined) = workers.join_next().await {
                match joined {
                    Ok(children) => frontier.extend(children),
                    Err(err) => tracing::error!(error = %err, "crawl worker aborted"),
                }
            }
        }

        let store = std::mem::take(&mut *self.store.lock().unwrap());
        let (graph, fetch_failures) = store.into_parts();
        let stats = CrawlStats {
            pages_visited: graph.len(),
            links_recorded: graph.link_count(),
            fetch_failures,
            duration: started.elapsed(),
        };
        tracing::info!(%stats, "crawl complete");

        Ok(CrawlOutcome { graph, stats })
    }
}

/// Fetches one claimed URL and reports the next frontier entries
///
/// On fetch failure the page is recorded with an empty outbound list and no
/// children are returned; the failure never escapes the worker. On success
/// the extracted links are normalized, deduplicated within the page in
/// first-seen order, recorded as the page's outbound list, and the
/// in-domain ones that look unvisited come back as depth + 1 children.
async fn process_page(
    fetcher: &dyn PageFetcher,
    store: &Mutex<CrawlStore>,
    base: &Url,
    entry: FrontierEntry,
) -> Vec<FrontierEntry> {
    let FrontierEntry { url, depth } = entry;
    tracing::debug!(%url, depth, "fetching");

    let body = match fetcher.fetch(&url).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(%url, error = %err, "fetch failed, page recorded without links");
            store.lock().unwrap().record_failure(&url);
            return Vec::new();
        }
    };

    let mut outbound = Vec::new();
    let mut seen_on_page = HashSet::new();
    let mut children = Vec::new();

    for raw in extract_links(&body) {
        let normalized = match normalize_link(base, &raw) {
            Ok(normalized) => normalized,
            Err(err) => {
                tracing::trace!(%url, link = %raw, error = %err, "dropping link");
                continue;
            }
        };

        if !seen_on_page.insert(normalized.clone()) {
            continue;
        }

        // The visited pre-check only trims obvious duplicates; a child that
        // races past it is still caught by the claim at dispatch.
        if is_within_domain(base, &normalized) && !store.lock().unwrap().is_visited(&normalized) {
            children.push(FrontierEntry {
                url: normalized.clone(),
                depth: depth + 1,
            });
        }

        outbound.push(normalized);
    }

    store.lock().unwrap().record_page(&url, outbound);
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use async_trait::async_trait;

    struct NoPages;

    #[async_trait]
    impl PageFetcher for NoPages {
        async fn fetch(&self, _url: &str) -> Result<String, crate::FetchError> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_invalid_config_rejected_before_any_fetch() {
        let mut config = CrawlConfig::new("https://example.com");
        config.concurrency = 0;

        let result = Engine::with_fetcher(config, Arc::new(NoPages));
        assert!(matches!(
            result,
            Err(LinkmapError::Config(ConfigError::InvalidConcurrency))
        ));
    }

    #[tokio::test]
    async fn test_single_page_crawl() {
        let config = CrawlConfig::new("https://example.com");
        let engine = Engine::with_fetcher(config, Arc::new(NoPages)).unwrap();

        let outcome = engine.run().await.unwrap();
        assert_eq!(outcome.graph.len(), 1);
        assert_eq!(outcome.graph.outbound("https://example.com"), Some(&[][..]));
        assert_eq!(outcome.stats.pages_visited, 1);
        assert_eq!(outcome.stats.fetch_failures, 0);
    }

    #[tokio::test]
    async fn test_seed_is_normalized_before_dispatch() {
        let config = CrawlConfig::new("http://EXAMPLE.com/");
        let engine = Engine::with_fetcher(config, Arc::new(NoPages)).unwrap();

        let outcome = engine.run().await.unwrap();
        assert!(outcome.graph.contains("https://example.com"));
    }
}
