//! Data Transfer Objects - request/response types for the posts API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::Post;

/// Structured author as accepted on the write path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request to create a post.
///
/// Fields are optional at the serde level so that presence is checked by the
/// handler, which reports every missing field instead of failing on the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorPayload>,
}

/// Partial update for a post. The embedded id, when present, must agree
/// with the path id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Wire representation of a post.
///
/// The structured author is flattened to a `"first last"` display string;
/// this projection is one-way, the write path only accepts the structured form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            author: post.author.full_name(),
            title: post.title,
            content: post.content,
            created: post.created.to_rfc3339(),
        }
    }
}
