//! Store port for link persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::Link;

/// Errors surfaced by link store backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Operation(String),

    #[error("Corrupt store entry: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Keyed access to persisted links.
///
/// Implementations own the key namespace and the store-native expiration of
/// entries; callers deal in slugs only. Reads never mutate the store, and
/// the one write is conditional, so racing writers for the same slug cannot
/// overwrite each other.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisLinkStore`] - production backend
/// - [`crate::infrastructure::store::MemoryLinkStore`] - in-process backend
///   for development and tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Fetches the link stored under a slug.
    ///
    /// Absent and expired entries both yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the stored payload does not parse.
    async fn get(&self, slug: &str) -> StoreResult<Option<Link>>;

    /// Returns whether a live entry occupies the slug.
    async fn exists(&self, slug: &str) -> StoreResult<bool>;

    /// Stores a link unless its slug is already taken.
    ///
    /// The write is atomic: it either creates the entry (returning `true`)
    /// or leaves an existing live entry untouched (returning `false`).
    /// `expires_at` becomes the store-native expiration of the entry.
    async fn put_if_absent(
        &self,
        link: &Link,
        expires_at: Option<DateTime<Utc>>,
    ) -> StoreResult<bool>;

    /// Reports whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
