//! In-memory document store for posts.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Post, PostDraft, PostPatch};
use quill_core::error::RepoError;
use quill_core::ports::PostStore;

use super::StoreConfig;

/// Post collection backed by a HashMap behind an async RwLock.
///
/// Every `open` yields an isolated collection, so a test run never shares
/// state with the server's own store or with another test.
/// Note: data is lost on process restart.
pub struct MemoryPostStore {
    namespace: String,
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl MemoryPostStore {
    /// Open a fresh collection under the configured namespace.
    pub fn open(config: &StoreConfig) -> Self {
        tracing::info!(namespace = %config.namespace(), "Opening in-memory post store");
        Self {
            namespace: config.namespace().to_string(),
            posts: RwLock::new(HashMap::new()),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn insert(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let post = Post::from_draft(draft);
        tracing::debug!(post_id = %post.id, "Inserting post");

        let mut posts = self.posts.write().await;
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn insert_many(&self, drafts: Vec<PostDraft>) -> Result<Vec<Post>, RepoError> {
        let inserted: Vec<Post> = drafts.into_iter().map(Post::from_draft).collect();
        tracing::debug!(count = inserted.len(), "Seeding posts");

        let mut posts = self.posts.write().await;
        for post in &inserted {
            posts.insert(post.id, post.clone());
        }
        Ok(inserted)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.values().next().cloned())
    }

    async fn all(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        let mut all: Vec<Post> = posts.values().cloned().collect();
        // Stable listing order for clients; ties broken by id.
        all.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.len() as u64)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.apply(patch);
        tracing::debug!(post_id = %id, "Updated post");
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        if posts.remove(&id).is_some() {
            tracing::debug!(post_id = %id, "Deleted post");
        }
        Ok(())
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        tracing::debug!(dropped = posts.len(), "Dropping post collection");
        posts.clear();
        Ok(())
    }
}
