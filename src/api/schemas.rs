// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "BLOG_POST_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Blog post not found")]
    pub message: String,

    /// Where the client should navigate instead, when there is a sensible place
    #[schema(example = "/blog")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}
