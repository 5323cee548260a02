//! Blocking transport to the remote scripture source.

use crate::common::error::{Error, Result};
use log::debug;
use std::time::Duration;

/// Default endpoint of the remote scripture source.
pub const DEFAULT_BASE_URL: &str = "http://ibibles.net/quote.php?kor";

/// Default request timeout.
///
/// A finite bound keeps a dead upstream from blocking the deck build
/// indefinitely. Expiry surfaces as [`Error::UpstreamUnavailable`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for fetching from the remote scripture source.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Base URL the chapter code and verse span are appended to
    pub base_url: String,
    /// Request timeout; expiry fails the resolution, no retry
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FetchConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the scripture source
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A response from the remote source: the raw status code and body text.
///
/// Status interpretation belongs to the resolver; the transport reports
/// whatever arrived.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// The seam between the resolver and the network.
///
/// One blocking request per call, no streaming, no retry. Implementations
/// return `Err` only when no response arrived at all (connect failure,
/// timeout); a response with a failure status is still `Ok`.
pub trait Transport {
    /// Perform a blocking GET of `url`.
    fn get(&self, url: &str) -> Result<TransportResponse>;
}

/// HTTP implementation of [`Transport`] over a blocking reqwest client.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a transport honoring the configured timeout.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::UpstreamUnavailable {
                status: None,
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<TransportResponse> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::UpstreamUnavailable {
                status: None,
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| Error::UpstreamUnavailable {
            status: Some(status),
            reason: format!("failed to read response body: {e}"),
        })?;

        Ok(TransportResponse { status, body })
    }
}
