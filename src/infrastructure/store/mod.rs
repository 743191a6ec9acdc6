//! Link store backends.
//!
//! Both backends share the stored-entry envelope defined in [`entry`] and
//! implement the [`LinkStore`](crate::domain::repositories::LinkStore)
//! contract, so the service layer never knows which one it is talking to.

mod entry;
mod memory_store;
mod redis_store;

pub use entry::{link_key, StoredEntry, LINK_KEY_PREFIX};
pub use memory_store::MemoryLinkStore;
pub use redis_store::RedisLinkStore;
