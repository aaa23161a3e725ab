//! Shared fast store abstraction.
//!
//! The fast store is the single point of cross-instance coordination in the
//! core: it backs both the read-through cache and the rate limiter's token
//! bucket. All shared mutable state lives here rather than in process
//! memory, so the core itself needs no locks.

mod redis_store;

pub use redis_store::RedisStore;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during fast store operations.
#[derive(Debug, Error)]
pub enum FastStoreError {
    #[error("fast store connection error: {0}")]
    Connection(String),

    #[error("fast store operation error: {0}")]
    Operation(String),
}

/// Result type for fast store operations.
pub type FastStoreResult<T> = Result<T, FastStoreError>;

/// In-memory key/value store with TTL expiry and server-side atomic scripts.
///
/// Implementations must be thread-safe. Callers apply their own failure
/// policy: the rate limiter fails open on any error here, and the cache
/// read path falls through to the durable store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FastStore: Send + Sync {
    /// Point lookup.
    ///
    /// `Ok(None)` is the distinguishable "definitely absent" outcome;
    /// callers treat it differently from `Err` (timeout, connection loss).
    async fn get(&self, key: &str) -> FastStoreResult<Option<String>>;

    /// Stores a value under `key`, expiring after `ttl`.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> FastStoreResult<()>;

    /// Executes a multi-step read-modify-write server-side as a single
    /// indivisible operation per key, returning its integer result.
    ///
    /// This is the only contention point in the core: splitting the
    /// operation into separate get/compute/set calls would reintroduce the
    /// check-then-act race the rate limiter exists to prevent.
    async fn run_atomic(
        &self,
        script: &str,
        keys: &[String],
        args: &[String],
    ) -> FastStoreResult<i64>;
}
