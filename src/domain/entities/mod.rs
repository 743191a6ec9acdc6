//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A stored short link record (also the persisted JSON shape)
//! - [`NewLink`] - Creation input, before a slug is allocated

pub mod link;

pub use link::{Link, NewLink};
