//! Authentication service for API token validation.

use serde_json::json;
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Service for authenticating API requests via Bearer tokens.
///
/// The configured site token is stored as a SHA-256 digest and presented
/// tokens are digested before comparison, so the plaintext token never sits
/// in this struct after startup.
pub struct AuthService {
    token_digest: [u8; 32],
}

impl AuthService {
    /// Creates a new authentication service for the given site token.
    pub fn new(site_token: &str) -> Self {
        Self {
            token_digest: digest_token(site_token),
        }
    }

    /// Authenticates a raw bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not match the
    /// configured site token.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        if digest_token(token) != self.token_digest {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid token" }),
            ));
        }

        Ok(())
    }
}

fn digest_token(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().into()
}
