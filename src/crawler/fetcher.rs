//! HTTP fetcher implementation
//!
//! The page fetcher is the engine's only blocking collaborator; it is kept
//! behind the [`PageFetcher`] trait so the traversal engine can be driven by
//! scripted fetchers in tests. [`HttpFetcher`] is the production
//! implementation backed by a shared `reqwest` client.

use crate::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Retrieves raw page content for a URL
///
/// Every failure is classified into one of the [`FetchError`] kinds; the
/// engine treats all of them the same way (the page is recorded with no
/// outbound links), so implementations must never panic on bad input.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Builds the shared HTTP client
///
/// # Arguments
///
/// * `timeout` - Per-request timeout covering the whole fetch
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(format!("linkmap/{}", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// The production page fetcher, backed by `reqwest`
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = build_http_client(timeout)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Request(format!("HTTP {}", status.as_u16())));
        }

        response.text().await.map_err(classify)
    }
}

/// Maps a `reqwest` error onto the fetch failure taxonomy
///
/// Timeouts are distinguished first since `reqwest` marks them as request
/// errors too; DNS, connection, and protocol-level failures become
/// `Request`; anything left (body decoding, client bugs) is `Unexpected`.
fn classify(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_connect() || error.is_request() || error.is_redirect() {
        FetchError::Request(error.to_string())
    } else {
        FetchError::Unexpected(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(Duration::from_secs(10));
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_fetcher_construction() {
        let fetcher = HttpFetcher::new(Duration::from_millis(500));
        assert!(fetcher.is_ok());
    }

    // Network-facing behavior (status classification, timeouts) is covered
    // by the wiremock tests in tests/fetch_tests.rs.
}
