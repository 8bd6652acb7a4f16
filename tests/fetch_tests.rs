//! HTTP-level tests for the page fetcher
//!
//! These use wiremock to exercise the reqwest-backed fetcher directly:
//! success bodies, HTTP status failures, and timeout classification.

use linkmap::crawler::{HttpFetcher, PageFetcher};
use linkmap::FetchError;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_returns_page_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><a href=\"/x\">x</a></body></html>"),
        )
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    let body = fetcher.fetch(&format!("{}/", server.uri())).await.unwrap();

    assert!(body.contains("href=\"/x\""));
}

#[tokio::test]
async fn test_not_found_classified_as_request_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    let result = fetcher
        .fetch(&format!("{}/missing", server.uri()))
        .await;

    match result {
        Err(FetchError::Request(message)) => assert!(message.contains("404")),
        other => panic!("expected request failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_classified_as_request_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    let result = fetcher.fetch(&format!("{}/broken", server.uri())).await;

    assert!(matches!(result, Err(FetchError::Request(_))));
}

#[tokio::test]
async fn test_slow_response_classified_as_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(Duration::from_millis(100)).unwrap();
    let result = fetcher.fetch(&format!("{}/slow", server.uri())).await;

    assert!(matches!(result, Err(FetchError::Timeout)));
}

#[tokio::test]
async fn test_connection_refused_classified_as_request_failure() {
    // Nothing listens on port 1
    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    let result = fetcher.fetch("http://127.0.0.1:1/").await;

    assert!(matches!(result, Err(FetchError::Request(_))));
}
