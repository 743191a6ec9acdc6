//! Link entity representing a stored short link.

use chrono::serde::{ts_seconds, ts_seconds_option};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A short link record.
///
/// This struct is the unit of persistence: the JSON stored in the link store
/// is exactly this serialized record. Timestamps serialize as unix seconds,
/// so `created_at` is kept at whole-second precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(with = "ts_seconds")]
    pub created_at: DateTime<Utc>,

    #[serde(
        default,
        with = "ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new link record stamped with the current time.
    pub fn new(
        url: String,
        slug: String,
        comment: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            url,
            slug,
            comment,
            created_at: Utc::now().trunc_subsecs(0),
            expires_at,
        }
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}

/// Input data for creating a new link.
///
/// `slug: None` requests a generated slug.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub url: String,
    pub slug: Option<String>,
    pub comment: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}
