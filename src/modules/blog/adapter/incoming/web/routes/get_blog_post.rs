use actix_web::{get, http::header, web, HttpRequest, Responder};
use tracing::error;

use crate::{
    modules::blog::application::ports::incoming::use_cases::{GetBlogPostError, ViewContext},
    shared::api::ApiResponse,
    AppState,
};

const BLOG_INDEX: &str = "/blog";

fn header_value(req: &HttpRequest, name: header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "blog",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Rendered article with SEO metadata", body = crate::modules::blog::application::ports::incoming::use_cases::BlogArticle),
        (status = 404, description = "Unknown or unpublished post; `error.redirect` is /blog", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/blog/{slug}")]
pub async fn get_blog_post_handler(
    req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();
    let context = ViewContext {
        referrer: header_value(&req, header::REFERER),
        user_agent: header_value(&req, header::USER_AGENT),
    };

    match data.blog.get_single.execute(&slug, context).await {
        Ok(article) => ApiResponse::success(article),

        Err(GetBlogPostError::NotFound) => ApiResponse::not_found_redirect(
            "BLOG_POST_NOT_FOUND",
            "Blog post not found",
            BLOG_INDEX,
        ),

        Err(GetBlogPostError::QueryFailed(msg)) => {
            error!(slug = %slug, "Failed to load blog post: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
