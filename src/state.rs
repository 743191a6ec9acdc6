use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::domain::repositories::LinkStore;

/// Shared application state available to all request handlers.
///
/// Cloning is cheap; every field is an `Arc` or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
    pub store: Arc<dyn LinkStore>,
    pub behind_proxy: bool,
}
