use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    modules::portfolio::application::domain::PortfolioFilter,
    shared::{api::ApiResponse, domain::ServiceType},
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PortfolioQueryParams {
    /// `web_dev`, `saas`, `android`, `custom`, or `all`
    pub service_type: Option<String>,
    pub featured: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    params(PortfolioQueryParams),
    responses(
        (status = 200, description = "Projects with their source (live or demo)", body = crate::modules::portfolio::application::ports::incoming::use_cases::PortfolioListing),
        (status = 400, description = "Unknown service type", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(
    data: web::Data<AppState>,
    query: web::Query<PortfolioQueryParams>,
) -> impl Responder {
    let service_type = match ServiceType::parse_filter(query.service_type.as_deref()) {
        Ok(service_type) => service_type,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    let filter = PortfolioFilter {
        service_type,
        featured: query.featured.unwrap_or(false),
    };

    ApiResponse::success(data.get_portfolio.execute(filter).await)
}
