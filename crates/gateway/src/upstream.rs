//! Outbound HTTP access to the NASA and JPL services.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

/// Query parameter carrying the NASA credential; never logged.
pub const API_KEY_PARAM: &str = "api_key";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("upstream responded with HTTP {status}")]
    Status { status: u16 },
}

/// A GET request against a third-party service.
#[derive(Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl UpstreamRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
        }
    }

    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Debug for UpstreamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Renders the URL and query with the credential redacted.
impl fmt::Display for UpstreamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            if key == API_KEY_PARAM {
                write!(f, "{sep}{key}=***")?;
            } else {
                write!(f, "{sep}{key}={value}")?;
            }
        }
        Ok(())
    }
}

/// Fetches the body of an upstream GET request as text.
pub trait Upstream: Send + Sync + 'static {
    fn fetch(
        &self,
        request: &UpstreamRequest,
    ) -> impl Future<Output = Result<String, UpstreamError>> + Send;
}

/// [`Upstream`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestUpstream {
    client: Client,
}

impl ReqwestUpstream {
    pub fn new(timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Network(e.without_url()))?;
        Ok(Self { client })
    }
}

impl Upstream for ReqwestUpstream {
    async fn fetch(&self, request: &UpstreamRequest) -> Result<String, UpstreamError> {
        let response = self
            .client
            .get(&request.url)
            .query(&request.query)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.without_url()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }
        response
            .text()
            .await
            .map_err(|e| UpstreamError::Network(e.without_url()))
    }
}
