//! Domain-level error types.

use thiserror::Error;

/// Store-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store operation failed: {0}")]
    Query(String),

    #[error("Post not found")]
    NotFound,
}
