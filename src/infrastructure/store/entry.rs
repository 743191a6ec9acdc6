//! Persisted representation of a link inside the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Namespace prefix applied to every link key.
pub const LINK_KEY_PREFIX: &str = "link:";

/// Builds the namespaced store key for a slug.
pub fn link_key(slug: &str) -> String {
    format!("{}{}", LINK_KEY_PREFIX, slug)
}

/// JSON envelope persisted for each link.
///
/// The metadata block duplicates the effective expiration so operators can
/// inspect entry lifetimes without deserializing the full record. The
/// application writes it and never reads it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEntry {
    pub link: Link,
    pub metadata: EntryMetadata,
}

/// Out-of-band entry metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryMetadata {
    /// Store-native expiration as unix seconds, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,
}

impl StoredEntry {
    /// Wraps a link and its effective expiration for persistence.
    pub fn new(link: Link, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            link,
            metadata: EntryMetadata {
                expiration: expires_at.map(|at| at.timestamp()),
            },
        }
    }
}
