//! Repository trait definitions for the domain layer.
//!
//! This module defines the store interface (trait) that abstracts link
//! persistence following the Repository pattern. The trait is implemented by
//! concrete backends in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::store`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod link_store;

pub use link_store::{LinkStore, StoreError, StoreResult};

#[cfg(test)]
pub use link_store::MockLinkStore;
