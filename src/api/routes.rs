//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::create_link_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST /links` - Create a short link
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/links", post(create_link_handler))
}
