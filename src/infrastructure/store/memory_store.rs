//! In-memory link store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use super::entry::{link_key, StoredEntry};
use crate::domain::entities::Link;
use crate::domain::repositories::{LinkStore, StoreResult};

struct MemoryEntry {
    payload: String,
    expires_at: Option<DateTime<Utc>>,
}

impl MemoryEntry {
    fn is_live(&self) -> bool {
        self.expires_at.is_none_or(|at| Utc::now() < at)
    }
}

/// Thread-safe in-memory implementation of the link store.
///
/// Mirrors the Redis semantics: expired entries are invisible to reads and
/// a conditional write may replace a dead entry. Intended for local
/// development and tests; entries do not survive a restart.
#[derive(Default)]
pub struct MemoryLinkStore {
    entries: RwLock<HashMap<String, MemoryEntry>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().filter(|e| e.is_live()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Returns the serialized payload stored under a raw key, if live.
    pub async fn raw_payload(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|e| e.is_live())
            .map(|e| e.payload.clone())
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn get(&self, slug: &str) -> StoreResult<Option<Link>> {
        let key = link_key(slug);
        let entries = self.entries.read().await;

        match entries.get(&key).filter(|e| e.is_live()) {
            Some(entry) => {
                let stored: StoredEntry = serde_json::from_str(&entry.payload)?;
                Ok(Some(stored.link))
            }
            None => Ok(None),
        }
    }

    async fn exists(&self, slug: &str) -> StoreResult<bool> {
        let key = link_key(slug);
        let entries = self.entries.read().await;
        Ok(entries.get(&key).is_some_and(MemoryEntry::is_live))
    }

    async fn put_if_absent(
        &self,
        link: &Link,
        expires_at: Option<DateTime<Utc>>,
    ) -> StoreResult<bool> {
        let key = link_key(&link.slug);
        let payload = serde_json::to_string(&StoredEntry::new(link.clone(), expires_at))?;

        let mut entries = self.entries.write().await;

        // A dead entry no longer claims its slug.
        if entries.get(&key).is_some_and(MemoryEntry::is_live) {
            debug!("Store PUT rejected, slug taken: {}", link.slug);
            return Ok(false);
        }

        entries.insert(key, MemoryEntry { payload, expires_at });
        debug!("Store PUT: {} (expires_at: {:?})", link.slug, expires_at);
        Ok(true)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
