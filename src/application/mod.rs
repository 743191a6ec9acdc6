//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating store calls,
//! slug allocation, and business rules. Services consume the store trait and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation and resolution
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
