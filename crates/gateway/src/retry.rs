//! Bounded retry with exponential backoff for upstream fetches.

use std::time::Duration;

use log::{debug, warn};

use crate::GatewayError;
use crate::upstream::{Upstream, UpstreamRequest};

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Pause after the `failed`-th failed attempt: `base_delay * 2^(failed - 1)`.
    pub fn backoff(&self, failed: u32) -> Duration {
        let exponent = failed.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1 << exponent)
    }
}

/// Fetch `request`, retrying failed attempts up to the policy limit.
pub async fn fetch_with_retry<U: Upstream>(
    upstream: &U,
    request: &UpstreamRequest,
    policy: RetryPolicy,
) -> Result<String, GatewayError> {
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;
    loop {
        debug!("upstream attempt {attempt}/{attempts}: {request}");
        match upstream.fetch(request).await {
            Ok(body) => return Ok(body),
            Err(err) if attempt < attempts => {
                let delay = policy.backoff(attempt);
                warn!(
                    "attempt {attempt}/{attempts} failed ({err}), retrying in {} ms",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(source) => {
                return Err(GatewayError::RetriesExhausted { attempts, source });
            }
        }
    }
}
