//! Handler for the link creation endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::create_link::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::extract_request_origin;
use crate::utils::short_link::compose_short_link;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "slug": "my-page",          // optional, generated when omitted
///   "comment": "launch page",   // optional
///   "expiration": 1767225600    // optional, Unix seconds
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored link and its shareable short form:
///
/// ```json
/// {
///   "link": {
///     "url": "https://example.com/page",
///     "slug": "my-page",
///     "comment": "launch page",
///     "created_at": 1756080000,
///     "expires_at": 1767225600
///   },
///   "short_link": "https://s.example.com/my-page"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request on validation failure or a reserved slug
/// - 409 Conflict when the slug is already taken
/// - 500 Internal Server Error when slug generation exhausts its budget
pub async fn create_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    payload.validate()?;

    // Resolve the origin first so a bad Host header cannot orphan a stored link.
    let origin = extract_request_origin(&headers, state.behind_proxy)?;

    let link = state
        .link_service
        .create_link(payload.into_new_link()?)
        .await?;
    let short_link = compose_short_link(&origin.scheme, &origin.host, &link.slug);

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse { link, short_link }),
    ))
}
