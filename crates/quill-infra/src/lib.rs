//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! Currently a single adapter: an in-memory document store for posts.

pub mod store;

pub use store::{MemoryPostStore, StoreConfig};
