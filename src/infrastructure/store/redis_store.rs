//! Redis-backed link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, ExistenceCheck, SetExpiry, SetOptions};
use tracing::{debug, info};

use super::entry::{link_key, StoredEntry};
use crate::domain::entities::Link;
use crate::domain::repositories::{LinkStore, StoreError, StoreResult};

/// Redis implementation of the link store.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. Unlike a cache, this store is the source of truth, so every error
/// propagates to the caller instead of degrading silently.
///
/// Entry lifetimes ride on Redis key expiration (`EXAT`); uniqueness rides
/// on conditional writes (`SET ... NX`).
pub struct RedisLinkStore {
    client: ConnectionManager,
}

impl RedisLinkStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        if e.is_connection_refusal() || e.is_connection_dropped() || e.is_io_error() || e.is_timeout()
        {
            StoreError::Connection(e.to_string())
        } else {
            StoreError::Operation(e.to_string())
        }
    }
}

#[async_trait]
impl LinkStore for RedisLinkStore {
    async fn get(&self, slug: &str) -> StoreResult<Option<Link>> {
        let key = link_key(slug);
        let mut conn = self.client.clone();

        let payload: Option<String> = conn.get(&key).await?;

        match payload {
            Some(raw) => {
                debug!("Store GET hit: {}", slug);
                let entry: StoredEntry = serde_json::from_str(&raw)?;
                Ok(Some(entry.link))
            }
            None => {
                debug!("Store GET miss: {}", slug);
                Ok(None)
            }
        }
    }

    async fn exists(&self, slug: &str) -> StoreResult<bool> {
        let key = link_key(slug);
        let mut conn = self.client.clone();

        // Redis evaluates key expiry on access, so EXISTS never reports a
        // logically expired key.
        let exists: bool = conn.exists(&key).await?;
        Ok(exists)
    }

    async fn put_if_absent(
        &self,
        link: &Link,
        expires_at: Option<DateTime<Utc>>,
    ) -> StoreResult<bool> {
        let key = link_key(&link.slug);
        let mut conn = self.client.clone();

        let payload = serde_json::to_string(&StoredEntry::new(link.clone(), expires_at))?;

        let mut options = SetOptions::default().conditional_set(ExistenceCheck::NX);
        if let Some(at) = expires_at {
            options = options.with_expiration(SetExpiry::EXAT(at.timestamp().max(0) as u64));
        }

        let created: bool = conn.set_options(&key, payload, options).await?;

        if created {
            debug!("Store PUT: {} (expires_at: {:?})", link.slug, expires_at);
        } else {
            debug!("Store PUT rejected, slug taken: {}", link.slug);
        }

        Ok(created)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
