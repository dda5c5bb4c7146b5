use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::blog::application::domain::BlogPostSummary;
use crate::modules::blog::application::ports::outgoing::{
    BlogListFilter, BlogQueryError, PageWindow,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BlogPostList {
    pub items: Vec<BlogPostSummary>,
    pub total: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListBlogPostsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<BlogQueryError> for ListBlogPostsError {
    fn from(err: BlogQueryError) -> Self {
        match err {
            BlogQueryError::DatabaseError(msg) | BlogQueryError::SerializationError(msg) => {
                ListBlogPostsError::QueryFailed(msg)
            }
            BlogQueryError::NotFound => ListBlogPostsError::QueryFailed("Not found".to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListBlogPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: BlogListFilter,
        window: PageWindow,
    ) -> Result<BlogPostList, ListBlogPostsError>;
}
