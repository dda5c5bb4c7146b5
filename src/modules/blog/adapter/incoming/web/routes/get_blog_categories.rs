use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    modules::blog::application::ports::incoming::use_cases::GetBlogCategoriesError,
    shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/blog/categories",
    tag = "blog",
    responses(
        (status = 200, description = "Categories of published posts", body = [String]),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/blog/categories")]
pub async fn get_blog_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.blog.categories.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(GetBlogCategoriesError::QueryFailed(msg)) => {
            error!("Failed to load blog categories: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
