use crate::state::UrlGraph;
use std::collections::HashSet;

/// The shared crawl store: visited set, URL graph, and failure count
///
/// This is the single owned store the engine places behind a mutex. Workers
/// never hold unsynchronized references to the visited set or the graph;
/// every mutation goes through a method here while the lock is held, which
/// is what makes `claim` an atomic membership test-and-insert.
///
/// Invariant: every key in the graph was first claimed, so graph keys are
/// always a subset of the visited set.
#[derive(Debug, Default)]
pub struct CrawlStore {
    visited: HashSet<String>,
    graph: UrlGraph,
    fetch_failures: usize,
}

impl CrawlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claims a URL for fetching
    ///
    /// Returns true if the URL was unseen and is now marked visited; false
    /// if some worker already owns it. A claimed URL is never dispatched a
    /// second time.
    pub fn claim(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Records the outbound links of a successfully fetched page.
    pub fn record_page(&mut self, url: &str, outbound: Vec<String>) {
        self.graph.insert(url, outbound);
    }

    /// Records a page whose fetch failed: it keeps its place in the graph
    /// with an empty outbound list.
    pub fn record_failure(&mut self, url: &str) {
        self.fetch_failures += 1;
        self.graph.insert(url, Vec::new());
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn fetch_failures(&self) -> usize {
        self.fetch_failures
    }

    /// Consumes the store, yielding the finished graph and the failure count.
    pub fn into_parts(self) -> (UrlGraph, usize) {
        (self.graph, self.fetch_failures)
    }
}
