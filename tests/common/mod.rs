#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use linkcut::application::services::{AuthService, LinkService};
use linkcut::domain::entities::Link;
use linkcut::domain::repositories::LinkStore;
use linkcut::infrastructure::store::MemoryLinkStore;
use linkcut::state::AppState;
use linkcut::utils::expiration::ExpirationPolicy;
use linkcut::utils::slug::{DEFAULT_RESERVED_SLUGS, RandomSlugGenerator};

pub const TEST_TOKEN: &str = "test-site-token";

pub fn create_test_state() -> (AppState, Arc<MemoryLinkStore>) {
    create_test_state_with(ExpirationPolicy::passthrough())
}

pub fn create_test_state_with(expiration: ExpirationPolicy) -> (AppState, Arc<MemoryLinkStore>) {
    let store = Arc::new(MemoryLinkStore::new());

    let reserved = DEFAULT_RESERVED_SLUGS
        .iter()
        .map(|s| s.to_string())
        .collect();

    let link_service = Arc::new(LinkService::new(
        store.clone(),
        Arc::new(RandomSlugGenerator),
        reserved,
        50,
        expiration,
    ));
    let auth_service = Arc::new(AuthService::new(TEST_TOKEN));

    let state = AppState {
        link_service,
        auth_service,
        store: store.clone(),
        behind_proxy: false,
    };

    (state, store)
}

pub async fn seed_link(store: &MemoryLinkStore, slug: &str, url: &str) -> Link {
    seed_link_expiring(store, slug, url, None).await
}

pub async fn seed_link_expiring(
    store: &MemoryLinkStore,
    slug: &str,
    url: &str,
    expires_at: Option<DateTime<Utc>>,
) -> Link {
    let link = Link::new(url.to_string(), slug.to_string(), None, expires_at);
    let created = store.put_if_absent(&link, expires_at).await.unwrap();
    assert!(created, "seed slug already taken: {slug}");
    link
}
