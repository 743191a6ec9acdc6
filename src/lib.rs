//! # linkcut
//!
//! A slug-allocating URL shortener built with Axum on top of a key-value
//! store (Redis in production, in-memory for development and tests).
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The link entity and the store trait
//! - **Application Layer** ([`application`]) - Slug allocation and authentication
//! - **Infrastructure Layer** ([`infrastructure`]) - Store backends
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Custom or generated slugs with a bounded allocation retry budget
//! - Conditional store writes, so racing requests cannot claim the same slug
//! - Per-link expiration riding on store-native key expiry
//! - Bearer token authentication for the API
//! - Structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export SITE_TOKEN="change-me-please"
//! export REDIS_URL="redis://localhost:6379"  # Or STORE_BACKEND=memory
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
