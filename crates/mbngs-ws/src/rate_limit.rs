//! Request throttling.
//!
//! MusicBrainz allows one request per second per application. The limiter is
//! a token bucket: it starts full with `requests` tokens and refills one
//! token every `interval / requests`.

use std::time::{Duration, Instant};

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};

use crate::config::RateLimit;

/// governor rejects a zero period.
const MIN_REPLENISH_INTERVAL: Duration = Duration::from_nanos(1);

/// Rate limiter shared by every request a client sends.
pub struct RequestLimiter {
    inner: Option<DefaultDirectRateLimiter>,
}

impl RequestLimiter {
    pub fn new(rate_limit: RateLimit) -> Self {
        let inner = match rate_limit {
            RateLimit::Disabled => None,
            RateLimit::Enabled { requests, .. } => replenish_interval(rate_limit)
                .and_then(Quota::with_period)
                .map(|quota| RateLimiter::direct(quota.allow_burst(requests))),
        };
        Self { inner }
    }

    /// Wait until a request may be sent.
    pub async fn until_ready(&self) {
        let Some(limiter) = &self.inner else {
            return;
        };
        if limiter.check().is_ok() {
            return;
        }
        let started = Instant::now();
        limiter.until_ready().await;
        tracing::debug!(waited = ?started.elapsed(), "Rate limiting: waited for request slot");
    }

    pub const fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }
}

impl std::fmt::Debug for RequestLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestLimiter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Time a single token takes to refill.
pub fn replenish_interval(rate_limit: RateLimit) -> Option<Duration> {
    match rate_limit {
        RateLimit::Disabled => None,
        RateLimit::Enabled { interval, requests } => {
            Some((interval / requests.get()).max(MIN_REPLENISH_INTERVAL))
        }
    }
}
