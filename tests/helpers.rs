// Shared test helpers for building fetchers against a mock server.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::atomic::{AtomicUsize, Ordering};

use httptest::Server;
use isitdown::{
    AvailabilityFetcher, BoxError, Config, HttpResponse, ReqwestTransport, Transport,
};
use reqwest::Url;

/// Results fragment for an UP site.
#[allow(dead_code)] // Used by other test files
pub const GOOGLE_UP: &str = include_str!("fixtures/google_up.html");

/// Results fragment for a DOWN site.
#[allow(dead_code)] // Used by other test files
pub const EXAMPLE_DOWN: &str = include_str!("fixtures/example_down.html");

/// Results fragment without the status block.
#[allow(dead_code)] // Used by other test files
pub const MISSING_BLOCK_FOUR: &str = include_str!("fixtures/missing_block_four.html");

/// Config whose endpoint is `/check.php` on the mock server.
pub fn mock_config(server: &Server) -> Config {
    Config {
        endpoint: format!("http://{}/check.php", server.addr()),
        ..Default::default()
    }
}

/// Real reqwest-backed fetcher pointed at the mock server.
#[allow(dead_code)] // Used by other test files
pub fn mock_fetcher(server: &Server) -> AvailabilityFetcher {
    AvailabilityFetcher::from_config(&mock_config(server)).expect("Failed to build fetcher")
}

/// Transport that counts requests before delegating to reqwest.
pub struct CountingTransport {
    inner: ReqwestTransport,
    calls: AtomicUsize,
}

impl CountingTransport {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for CountingTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get(url).await
    }
}

/// Counting fetcher pointed at the mock server.
#[allow(dead_code)] // Used by other test files
pub fn counting_fetcher(server: &Server) -> AvailabilityFetcher<CountingTransport> {
    let config = mock_config(server);
    let endpoint = Url::parse(&config.endpoint).expect("Mock endpoint should parse");
    let transport = CountingTransport {
        inner: ReqwestTransport::new(reqwest::Client::new()),
        calls: AtomicUsize::new(0),
    };
    AvailabilityFetcher::new(transport, endpoint)
}
