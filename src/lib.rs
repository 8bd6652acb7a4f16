//! Linkmap: a bounded-depth, single-domain link graph crawler
//!
//! This crate crawls a website starting from a single URL, staying within the
//! starting domain, and records which URLs each visited page links to. The
//! resulting graph is written out as a JSON document.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Linkmap operations
#[derive(Debug, Error)]
pub enum LinkmapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Worker pool unavailable: {0}")]
    WorkerPool(String),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Configuration-specific errors
///
/// All of these are fatal: they are raised during pre-flight validation,
/// before any fetch is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Starting URL is missing or empty")]
    MissingStartUrl,

    #[error("Starting URL must include an http or https scheme: {0}")]
    MissingScheme(String),

    #[error("Starting URL has no host: {0}")]
    MissingHost(String),

    #[error("Invalid starting URL {url}: {reason}")]
    InvalidStartUrl { url: String, reason: String },

    #[error("Concurrency must be at least 1")]
    InvalidConcurrency,
}

/// URL-specific errors
///
/// A `UrlError` marks a discovered link as invalid; the engine drops such
/// links rather than propagating the error.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Empty link")]
    Empty,

    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Missing host in URL")]
    MissingHost,

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Per-URL fetch failures
///
/// Each kind is contained within the worker that owns the URL: the page is
/// recorded with no outbound links and the crawl continues.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timed out")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected fetch failure: {0}")]
    Unexpected(String),
}

/// Output persistence errors
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for Linkmap operations
pub type Result<T> = std::result::Result<T, LinkmapError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{run_crawl, CrawlOutcome, Engine, HttpFetcher, PageFetcher};
pub use state::UrlGraph;
pub use url::{is_within_domain, normalize_link};
