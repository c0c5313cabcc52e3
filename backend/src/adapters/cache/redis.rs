//! Redis-backed memo cache for production deployments.
//!
//! Slots are plain string keys under the configured prefix, written without
//! expiry. Writes are last-writer-wins.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::config::RedisConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::MemoCache;

#[derive(Clone)]
pub struct RedisMemoCache {
    conn: MultiplexedConnection,
    key_prefix: String,
}

impl RedisMemoCache {
    pub fn new(conn: MultiplexedConnection, key_prefix: impl Into<String>) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    /// Opens a multiplexed connection, bounded by the configured timeout.
    pub async fn connect(config: &RedisConfig) -> Result<Self, DomainError> {
        let client = redis::Client::open(config.url.as_str()).map_err(cache_error)?;
        let conn = tokio::time::timeout(config.timeout(), client.get_multiplexed_tokio_connection())
            .await
            .map_err(|_| {
                DomainError::new(ErrorCode::CacheError, "Timed out connecting to Redis")
            })?
            .map_err(cache_error)?;

        Ok(Self::new(conn, config.key_prefix.clone()))
    }

    fn slot(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl MemoCache for RedisMemoCache {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let mut conn = self.conn.clone();
        conn.get(self.slot(key))
            .await
            .map_err(|e: redis::RedisError| cache_error(e))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(self.slot(key), value)
            .await
            .map_err(|e: redis::RedisError| cache_error(e))
    }
}

fn cache_error(err: redis::RedisError) -> DomainError {
    DomainError::new(ErrorCode::CacheError, format!("Redis error: {}", err))
}
