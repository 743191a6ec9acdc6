//! Utility functions for slug generation, link composition, and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`slug`] - Slug generation and the reserved slug set
//! - [`short_link`] - Short link composition
//! - [`expiration`] - Expiration policy applied to new links
//! - [`request_origin`] - Scheme/host extraction from HTTP headers

pub mod expiration;
pub mod request_origin;
pub mod short_link;
pub mod slug;
