//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its destination URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Response Codes
///
/// - **307 Temporary Redirect**: slug found, `Location` carries the URL
/// - **404 Not Found**: slug unknown or link expired
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.resolve_link(&slug).await?;

    Ok(Redirect::temporary(&link.url))
}
