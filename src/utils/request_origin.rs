//! Request origin extraction from HTTP headers.

use axum::http::uri::Authority;
use axum::http::{header, HeaderMap};
use serde_json::json;

use crate::error::AppError;

/// Scheme and host a request was addressed to, as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: String,
    pub host: String,
}

/// Extracts the public origin of a request.
///
/// Reads the `Host` header and assumes `http` (the service itself never
/// terminates TLS). When `behind_proxy` is set, `X-Forwarded-Host` and
/// `X-Forwarded-Proto` take priority so the origin reflects what the client
/// sees in front of the proxy. The scheme is clamped to `http`/`https`.
///
/// The host value (including an optional port) must parse as a URI
/// authority.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - No host header is present
/// - The header value contains invalid UTF-8
/// - The value is not a valid authority
pub fn extract_request_origin(
    headers: &HeaderMap,
    behind_proxy: bool,
) -> Result<RequestOrigin, AppError> {
    let host = if behind_proxy {
        header_str(headers, "x-forwarded-host")
            .or_else(|| header_str(headers, header::HOST.as_str()))
    } else {
        header_str(headers, header::HOST.as_str())
    }
    .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?;

    let authority: Authority = host
        .parse()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({ "host": host })))?;

    let scheme = if behind_proxy && header_str(headers, "x-forwarded-proto") == Some("https") {
        "https"
    } else {
        "http"
    };

    Ok(RequestOrigin {
        scheme: scheme.to_string(),
        host: authority.to_string(),
    })
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
