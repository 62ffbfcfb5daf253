//! Post store adapters.

mod config;
mod memory;

pub use config::StoreConfig;
pub use memory::MemoryPostStore;
