//! Domain entities - the core business objects.

mod post;

pub use post::{Author, Post, PostDraft, PostPatch};
