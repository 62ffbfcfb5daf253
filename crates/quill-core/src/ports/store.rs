use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostDraft, PostPatch};
use crate::error::RepoError;

/// Document collection of posts.
///
/// The store owns all post state; it assigns ids and created timestamps at
/// insert and keeps them stable afterwards. `count` always reflects exactly
/// the live records.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a single draft, assigning id and created.
    async fn insert(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Bulk insert - the seed path used by tests to bypass HTTP.
    async fn insert_many(&self, drafts: Vec<PostDraft>) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique id. `None` once the post is deleted or dropped.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// An arbitrary existing post, or `None` when the collection is empty.
    async fn find_one(&self) -> Result<Option<Post>, RepoError>;

    /// All live posts.
    async fn all(&self) -> Result<Vec<Post>, RepoError>;

    /// Number of live posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Patch an existing post in place. `RepoError::NotFound` if the id is
    /// absent; never creates a record.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, RepoError>;

    /// Remove a post. Deleting an absent id is a no-op.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;

    /// Drop the whole collection.
    async fn drop_all(&self) -> Result<(), RepoError>;
}
