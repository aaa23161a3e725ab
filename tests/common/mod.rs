//! Shared test doubles for integration tests.

use async_trait::async_trait;
use link_shortener::prelude::{FastStore, FastStoreError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

type FastStoreResult<T> = Result<T, FastStoreError>;

/// In-process stand-in for the shared fast store.
///
/// Key/value entries honor their TTL, and `run_atomic` performs the same
/// refill-and-consume steps as the production token-bucket script, under a
/// single lock so the operation is indivisible exactly like the server-side
/// script execution it replaces.
#[derive(Default)]
pub struct MemoryFastStore {
    values: Mutex<HashMap<String, (String, Instant)>>,
    buckets: Mutex<HashMap<String, (f64, i64)>>,
}

impl MemoryFastStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a live (unexpired) entry exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values
            .lock()
            .unwrap()
            .get(key)
            .is_some_and(|(_, expires_at)| Instant::now() < *expires_at)
    }
}

#[async_trait]
impl FastStore for MemoryFastStore {
    async fn get(&self, key: &str) -> FastStoreResult<Option<String>> {
        let values = self.values.lock().unwrap();

        Ok(values.get(key).and_then(|(value, expires_at)| {
            (Instant::now() < *expires_at).then(|| value.clone())
        }))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> FastStoreResult<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_owned(), (value.to_owned(), Instant::now() + ttl));
        Ok(())
    }

    async fn run_atomic(
        &self,
        _script: &str,
        keys: &[String],
        args: &[String],
    ) -> FastStoreResult<i64> {
        let rate: f64 = args[0].parse().unwrap();
        let burst: f64 = args[1].parse().unwrap();
        let now: i64 = args[2].parse().unwrap();

        let mut buckets = self.buckets.lock().unwrap();
        let (tokens, last_refill) = buckets.get(&keys[0]).copied().unwrap_or((burst, now));

        let elapsed = (now - last_refill).max(0) as f64 / 1_000_000.0;
        let mut tokens = (tokens + elapsed * rate).min(burst);

        let allowed = if tokens >= 1.0 {
            tokens -= 1.0;
            1
        } else {
            0
        };

        buckets.insert(keys[0].clone(), (tokens, now));
        Ok(allowed)
    }
}

/// A fast store whose backend is unreachable. Every call fails.
pub struct DownFastStore;

#[async_trait]
impl FastStore for DownFastStore {
    async fn get(&self, _key: &str) -> FastStoreResult<Option<String>> {
        Err(FastStoreError::Connection("fast store is down".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> FastStoreResult<()> {
        Err(FastStoreError::Connection("fast store is down".to_string()))
    }

    async fn run_atomic(
        &self,
        _script: &str,
        _keys: &[String],
        _args: &[String],
    ) -> FastStoreResult<i64> {
        Err(FastStoreError::Connection("fast store is down".to_string()))
    }
}
