//! Link creation and resolution service.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::expiration::ExpirationPolicy;
use crate::utils::slug::SlugGenerator;

/// Service for creating and resolving short links.
///
/// Owns slug allocation: custom slugs are checked once against the reserved
/// set and the store, generated slugs are drawn from the generator under a
/// bounded attempt budget. The final word on uniqueness is always the
/// store's conditional write, so two concurrent requests for the same slug
/// cannot both succeed.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    generator: Arc<dyn SlugGenerator>,
    reserved_slugs: HashSet<String>,
    max_attempts: usize,
    expiration: ExpirationPolicy,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        store: Arc<dyn LinkStore>,
        generator: Arc<dyn SlugGenerator>,
        reserved_slugs: HashSet<String>,
        max_attempts: usize,
        expiration: ExpirationPolicy,
    ) -> Self {
        Self {
            store,
            generator,
            reserved_slugs,
            max_attempts,
            expiration,
        }
    }

    /// Creates a link, allocating a slug if the request did not carry one.
    ///
    /// # Slug allocation
    ///
    /// - A requested slug is rejected up front when it is reserved, and with
    ///   a conflict when it is already taken.
    /// - Without a requested slug, random candidates are drawn until one is
    ///   free, bounded by the configured attempt budget.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ReservedSlug`] for a reserved custom slug,
    /// [`AppError::Conflict`] when the slug is already taken (including the
    /// case where a concurrent request wins the conditional write), and
    /// [`AppError::SlugExhausted`] when the attempt budget runs out.
    pub async fn create_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        let slug = match new_link.slug {
            Some(slug) => {
                self.claim_custom_slug(&slug).await?;
                slug
            }
            None => self.allocate_slug().await?,
        };

        let link = Link::new(new_link.url, slug, new_link.comment, new_link.expires_at);
        let store_expiry = self.expiration.resolve(link.expires_at);

        let created = self.store.put_if_absent(&link, store_expiry).await?;
        if !created {
            // Lost the conditional write to a concurrent request.
            return Err(AppError::conflict(
                "Link already exists",
                json!({ "slug": link.slug }),
            ));
        }

        debug!("Created link: {} -> {}", link.slug, link.url);
        Ok(link)
    }

    /// Resolves a slug to its link, treating expired entries as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the slug is unknown or the link
    /// has expired.
    pub async fn resolve_link(&self, slug: &str) -> Result<Link, AppError> {
        let link = self
            .store
            .get(slug)
            .await?
            .filter(|link| !link.is_expired())
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "slug": slug })))?;

        debug!("Resolved link: {} -> {}", slug, link.url);
        Ok(link)
    }

    /// Validates a user-requested slug with exactly one existence check.
    async fn claim_custom_slug(&self, slug: &str) -> Result<(), AppError> {
        if self.is_reserved(slug) {
            return Err(AppError::reserved_slug(
                "Slug is reserved",
                json!({ "slug": slug }),
            ));
        }

        if self.store.exists(slug).await? {
            return Err(AppError::conflict(
                "Link already exists",
                json!({ "slug": slug }),
            ));
        }

        Ok(())
    }

    /// Draws random candidates until one is free, within the attempt budget.
    ///
    /// Reserved candidates consume an attempt but are screened locally,
    /// without a store round trip.
    async fn allocate_slug(&self) -> Result<String, AppError> {
        let mut attempts_left = self.max_attempts;

        while attempts_left > 0 {
            attempts_left -= 1;

            let candidate = self.generator.generate();
            if self.is_reserved(&candidate) {
                continue;
            }

            if !self.store.exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(AppError::slug_exhausted(
            "Unable to generate unique slug after multiple attempts",
            json!({ "attempts": self.max_attempts }),
        ))
    }

    fn is_reserved(&self, slug: &str) -> bool {
        self.reserved_slugs.contains(slug)
    }
}
