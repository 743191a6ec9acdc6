//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for link storage.
//!
//! # Modules
//!
//! - [`store`] - Link store backends (Redis and in-memory implementations)

pub mod store;
