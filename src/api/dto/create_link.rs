//! DTOs for the link creation endpoint.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::{Validate, ValidationError};

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;

/// Compiled regex for custom slug validation.
///
/// Alphanumeric segments separated by single hyphens; no leading, trailing,
/// or doubled hyphen.
static CUSTOM_SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$").unwrap());

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The destination URL (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 2048, message = "URL too long"))]
    pub url: String,

    /// Optional custom slug (otherwise one is generated).
    #[validate(length(min = 1, max = 64, message = "Slug must be 1-64 characters"))]
    #[validate(regex(path = *CUSTOM_SLUG_REGEX, message = "Invalid slug format"))]
    pub slug: Option<String>,

    /// Optional free-form note stored with the link.
    #[validate(length(max = 2048, message = "Comment too long"))]
    pub comment: Option<String>,

    /// Optional expiration as a Unix timestamp in seconds.
    #[validate(custom(function = validate_expiration))]
    pub expiration: Option<i64>,
}

impl CreateLinkRequest {
    /// Converts the validated request into the service-layer input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the expiration timestamp is
    /// outside the representable range.
    pub fn into_new_link(self) -> Result<NewLink, AppError> {
        let expires_at = match self.expiration {
            Some(secs) => Some(parse_expiration(secs)?),
            None => None,
        };

        Ok(NewLink {
            url: self.url,
            slug: self.slug,
            comment: self.comment,
            expires_at,
        })
    }
}

fn parse_expiration(secs: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| AppError::bad_request("Invalid expiration", json!({ "expiration": secs })))
}

fn validate_expiration(expiration: i64) -> Result<(), ValidationError> {
    if expiration <= Utc::now().timestamp() {
        return Err(ValidationError::new("expiration_in_past")
            .with_message("Expiration must be in the future".into()));
    }
    Ok(())
}

/// Response for a created link.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub link: Link,
    pub short_link: String,
}
