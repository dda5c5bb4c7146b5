use async_trait::async_trait;

use crate::modules::blog::application::domain::BlogPost;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogListFilter {
    pub category: Option<String>,
    /// `true` restricts to featured posts; `false` applies no restriction
    pub featured: bool,
    /// Case-insensitive match on title or excerpt
    pub search: Option<String>,
}

pub const DEFAULT_PAGE_LIMIT: u64 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl PageWindow {
    pub fn first(limit: u64) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
        }
    }

    /// Row limit to apply. An offset without a limit pages by ten.
    pub fn effective_limit(&self) -> Option<u64> {
        match (self.limit, self.offset) {
            (Some(limit), _) => Some(limit),
            (None, Some(_)) => Some(DEFAULT_PAGE_LIMIT),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPage {
    pub items: Vec<BlogPost>,
    pub total: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogQueryError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (published posts only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BlogQuery: Send + Sync {
    /// Newest first by publication date, with the unpaged match count.
    async fn list_published(
        &self,
        filter: BlogListFilter,
        window: PageWindow,
    ) -> Result<BlogPage, BlogQueryError>;

    async fn get_published_by_slug(&self, slug: &str) -> Result<BlogPost, BlogQueryError>;

    /// Distinct non-null categories
    async fn categories(&self) -> Result<Vec<String>, BlogQueryError>;
}
