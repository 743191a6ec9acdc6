//! Slug generation for short links.
//!
//! Provides cryptographically secure random slug generation and the built-in
//! reserved slug set.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const SLUG_LENGTH_BYTES: usize = 6;

/// Slugs that can never be allocated to links.
///
/// These are reserved for system endpoints to prevent routing conflicts.
/// The configuration unions this set with `RESERVED_SLUGS`.
pub const DEFAULT_RESERVED_SLUGS: &[&str] = &["api", "health", "dashboard"];

/// Source of candidate slugs for generated links.
///
/// # Implementations
///
/// - [`RandomSlugGenerator`] - production generator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait SlugGenerator: Send + Sync {
    /// Draws one candidate slug.
    fn generate(&self) -> String;
}

/// Generator producing cryptographically random slugs.
pub struct RandomSlugGenerator;

impl SlugGenerator for RandomSlugGenerator {
    fn generate(&self) -> String {
        generate_slug()
    }
}

/// Generates a cryptographically secure random slug.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character slug. Slugs are deliberately
/// short, so collisions with existing links are possible and callers must
/// check candidates against the store.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug();
/// assert_eq!(slug.len(), 8);
/// assert!(slug.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_slug() -> String {
    let mut buffer = [0u8; SLUG_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
