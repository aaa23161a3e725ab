//! Redis-backed implementation of the shared fast store.

use super::{FastStore, FastStoreError, FastStoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, Script, aio::ConnectionManager};
use std::time::Duration;
use tracing::info;

/// Redis implementation of [`FastStore`].
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. Atomic operations run as Lua scripts (EVALSHA with transparent
/// EVAL fallback), which Redis executes single-threaded per invocation.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`FastStoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> FastStoreResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            FastStoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            FastStoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| FastStoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl FastStore for RedisStore {
    async fn get(&self, key: &str) -> FastStoreResult<Option<String>> {
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| FastStoreError::Operation(e.to_string()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> FastStoreResult<()> {
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
            .map_err(|e| FastStoreError::Operation(e.to_string()))
    }

    async fn run_atomic(
        &self,
        script: &str,
        keys: &[String],
        args: &[String],
    ) -> FastStoreResult<i64> {
        let mut conn = self.client.clone();

        let script = Script::new(script);
        let mut invocation = script.prepare_invoke();
        for key in keys {
            invocation.key(key.as_str());
        }
        for arg in args {
            invocation.arg(arg.as_str());
        }

        let result: i64 = invocation
            .invoke_async(&mut conn)
            .await
            .map_err(|e| FastStoreError::Operation(e.to_string()))?;

        Ok(result)
    }
}
