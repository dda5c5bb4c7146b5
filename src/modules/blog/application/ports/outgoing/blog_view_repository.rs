use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogView {
    pub blog_id: Uuid,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogViewRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Insert-only analytics log. The stored view count is maintained by a
/// database trigger on insert.
#[async_trait]
pub trait BlogViewRepository: Send + Sync {
    async fn record(&self, view: NewBlogView) -> Result<(), BlogViewRepositoryError>;
}
