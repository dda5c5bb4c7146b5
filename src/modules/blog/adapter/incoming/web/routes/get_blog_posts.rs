use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::{
    modules::blog::application::ports::{
        incoming::use_cases::ListBlogPostsError,
        outgoing::{BlogListFilter, PageWindow},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct BlogListQuery {
    pub category: Option<String>,
    /// Only featured posts when `true`
    pub featured: Option<bool>,
    /// Matched against title and excerpt, case-insensitive
    pub search: Option<String>,
    pub limit: Option<u64>,
    /// Without `limit`, pages of 10 are used
    pub offset: Option<u64>,
}

impl BlogListQuery {
    fn into_parts(self) -> (BlogListFilter, PageWindow) {
        let filter = BlogListFilter {
            category: self.category.filter(|c| !c.trim().is_empty()),
            featured: self.featured.unwrap_or(false),
            search: self.search.filter(|s| !s.trim().is_empty()),
        };
        let window = PageWindow {
            limit: self.limit,
            offset: self.offset,
        };
        (filter, window)
    }
}

#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "blog",
    params(BlogListQuery),
    responses(
        (status = 200, description = "Published posts, newest first", body = crate::modules::blog::application::ports::incoming::use_cases::BlogPostList),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/blog")]
pub async fn get_blog_posts_handler(
    data: web::Data<AppState>,
    query: web::Query<BlogListQuery>,
) -> impl Responder {
    let (filter, window) = query.into_inner().into_parts();

    match data.blog.list.execute(filter, window).await {
        Ok(list) => ApiResponse::success(list),
        Err(ListBlogPostsError::QueryFailed(msg)) => {
            error!("Failed to list blog posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
