use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::blog::application::domain::{BlogPost, BlogPostSummary, Block};
use crate::modules::blog::application::ports::outgoing::BlogQueryError;
use crate::site::application::domain::{PageMeta, ShareLinks};

/// Request details stored with the view record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewContext {
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

/// A published post ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BlogArticle {
    pub post: BlogPost,
    pub blocks: Vec<Block>,
    /// At most two other posts from the same category
    pub related: Vec<BlogPostSummary>,
    pub meta: PageMeta,
    pub head_html: String,
    /// schema.org `Article`
    #[schema(value_type = Object)]
    pub json_ld: serde_json::Value,
    pub json_ld_html: String,
    pub share: ShareLinks,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBlogPostError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<BlogQueryError> for GetBlogPostError {
    fn from(err: BlogQueryError) -> Self {
        match err {
            BlogQueryError::NotFound => GetBlogPostError::NotFound,
            BlogQueryError::DatabaseError(msg) | BlogQueryError::SerializationError(msg) => {
                GetBlogPostError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait GetBlogPostUseCase: Send + Sync {
    async fn execute(&self, slug: &str, context: ViewContext)
        -> Result<BlogArticle, GetBlogPostError>;
}
