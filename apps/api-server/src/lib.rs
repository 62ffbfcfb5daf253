//! # Quill API
//!
//! Library target for the Quill API server. The binary and the integration
//! test suite both assemble the application from these modules.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

pub use config::AppConfig;
pub use state::AppState;
