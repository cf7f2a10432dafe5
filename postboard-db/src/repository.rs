use crate::client::Result;
use async_trait::async_trait;
use postboard_common::model::post::{Post, PostId, SortOrder};

/// Queries over the posts table. One call issues one statement, apart from
/// [`PostRepository::seed`] which runs a single transaction.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Drops and recreates the posts table, then inserts the canonical seed
    /// rows.
    async fn seed(&self) -> Result<()>;

    async fn fetch_posts(&self) -> Result<Vec<Post>>;

    async fn fetch_post(&self, post_id: PostId) -> Result<Option<Post>>;

    async fn fetch_posts_by_author(&self, author: &str) -> Result<Vec<Post>>;

    async fn fetch_posts_sorted_by_name(&self, order: SortOrder) -> Result<Vec<Post>>;
}
