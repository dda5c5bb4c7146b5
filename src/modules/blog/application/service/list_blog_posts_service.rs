use async_trait::async_trait;

use crate::modules::blog::application::ports::incoming::use_cases::{
    BlogPostList, ListBlogPostsError, ListBlogPostsUseCase,
};
use crate::modules::blog::application::ports::outgoing::{BlogListFilter, BlogQuery, PageWindow};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct ListBlogPostsService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> ListBlogPostsService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListBlogPostsUseCase for ListBlogPostsService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: BlogListFilter,
        window: PageWindow,
    ) -> Result<BlogPostList, ListBlogPostsError> {
        let page = self.query.list_published(filter, window).await?;

        Ok(BlogPostList {
            items: page.items.iter().map(|post| post.summary()).collect(),
            total: page.total,
        })
    }
}
