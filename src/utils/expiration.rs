//! Link expiration policy.

use chrono::{DateTime, Duration, Utc};

/// Resolves the effective expiration applied to newly created links.
///
/// In preview mode every link is short-lived regardless of the requested
/// expiration, keeping throwaway deployments clean. The stored record still
/// carries the requested expiration; only the store-native entry lifetime is
/// overridden.
#[derive(Debug, Clone, Copy)]
pub struct ExpirationPolicy {
    preview_mode: bool,
    preview_ttl_seconds: u64,
}

impl ExpirationPolicy {
    pub fn new(preview_mode: bool, preview_ttl_seconds: u64) -> Self {
        Self {
            preview_mode,
            preview_ttl_seconds,
        }
    }

    /// Policy that passes requested expirations through unchanged.
    pub fn passthrough() -> Self {
        Self::new(false, 0)
    }

    /// Returns the store-native expiration for a link.
    pub fn resolve(&self, requested: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
        if self.preview_mode {
            Some(Utc::now() + Duration::seconds(self.preview_ttl_seconds as i64))
        } else {
            requested
        }
    }
}
