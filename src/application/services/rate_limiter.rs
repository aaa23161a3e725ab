//! Distributed token-bucket rate limiter.
//!
//! Per-identity buckets live in the shared fast store, refilled continuously
//! at a fixed rate and capped at a burst capacity. The whole
//! check-refill-consume step executes server-side as one atomic operation,
//! so any number of service instances can limit the same identity without
//! a central lock.

use crate::infrastructure::fast_store::{FastStore, FastStoreError};
use chrono::Utc;
use metrics::counter;
use std::sync::Arc;
use tracing::warn;

/// Atomic token-bucket step.
///
/// Reads the bucket, refills it in proportion to the elapsed time since the
/// last call, and consumes one token if at least one is available. A missing
/// bucket starts full. Fractional tokens are kept so sustained-rate traffic
/// is admitted smoothly rather than in whole-token bursts. The record
/// expires once an idle bucket would have fully refilled anyway.
const TOKEN_BUCKET_SCRIPT: &str = r"
local key         = KEYS[1]
local rate        = tonumber(ARGV[1])
local burst       = tonumber(ARGV[2])
local now         = tonumber(ARGV[3])

local bucket      = redis.call('HMGET', key, 'tokens', 'last_refill')
local tokens      = tonumber(bucket[1])
local last_refill = tonumber(bucket[2])

if tokens == nil then
    tokens      = burst
    last_refill = now
end

local elapsed    = math.max(0, now - last_refill) / 1000000
local new_tokens = math.min(burst, tokens + elapsed * rate)

local allowed = 0
if new_tokens >= 1 then
    new_tokens = new_tokens - 1
    allowed    = 1
end

local ttl = math.ceil(burst / rate) + 1
redis.call('HMSET', key, 'tokens', new_tokens, 'last_refill', now)
redis.call('EXPIRE', key, ttl)

return allowed
";

/// Key namespace for rate limit buckets.
const RATE_KEY_PREFIX: &str = "rl:";

/// Outcome of an admission check.
#[derive(Debug)]
pub struct RateLimitDecision {
    /// Whether the request is admitted.
    pub admitted: bool,
    /// Set when the fast store failed and the limiter admitted fail-open.
    /// The request went through, but operators should know the limiter is
    /// not currently limiting.
    pub degraded: Option<FastStoreError>,
}

/// Token-bucket rate limiter keyed by caller identity.
pub struct RateLimiter<F> {
    fast_store: Arc<F>,
    rate: f64,
    burst: f64,
}

impl<F: FastStore> RateLimiter<F> {
    /// Creates a limiter admitting `rate` requests per second sustained,
    /// with bursts of up to `burst` requests.
    pub fn new(fast_store: Arc<F>, rate: f64, burst: u32) -> Self {
        Self {
            fast_store,
            rate,
            burst: f64::from(burst),
        }
    }

    /// Consumes one token for `identity` and reports whether the request
    /// is admitted.
    ///
    /// An identity with no bucket yet is treated as a fresh full bucket,
    /// never as rate-exceeded. Any fast-store error fails open: the
    /// request is admitted and the error is carried in the decision. A
    /// limiter outage must not become a full outage.
    pub async fn allow(&self, identity: &str) -> RateLimitDecision {
        let keys = [format!("{RATE_KEY_PREFIX}{identity}")];
        let args = [
            self.rate.to_string(),
            self.burst.to_string(),
            Utc::now().timestamp_micros().to_string(),
        ];

        match self
            .fast_store
            .run_atomic(TOKEN_BUCKET_SCRIPT, &keys, &args)
            .await
        {
            Ok(allowed) => RateLimitDecision {
                admitted: allowed == 1,
                degraded: None,
            },
            Err(e) => {
                warn!("rate limiter store error for {} (fail-open): {}", identity, e);
                counter!("rate_limiter_fail_open_total").increment(1);
                RateLimitDecision {
                    admitted: true,
                    degraded: Some(e),
                }
            }
        }
    }
}
