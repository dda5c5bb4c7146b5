use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::{
    modules::service_package::application::ports::incoming::use_cases::ListServicePackagesError,
    shared::{api::ApiResponse, domain::ServiceType},
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ServicePackagesQuery {
    /// `web_dev`, `saas`, `android` or `custom`
    pub service_type: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/service-packages",
    tag = "services",
    params(ServicePackagesQuery),
    responses(
        (status = 200, description = "Active packages, cheapest first", body = [crate::modules::service_package::application::domain::ServicePackage]),
        (status = 400, description = "Unknown service type", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/service-packages")]
pub async fn get_service_packages_handler(
    data: web::Data<AppState>,
    query: web::Query<ServicePackagesQuery>,
) -> impl Responder {
    let service_type = match ServiceType::parse_filter(query.service_type.as_deref()) {
        Ok(service_type) => service_type,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.list_service_packages.execute(service_type).await {
        Ok(packages) => ApiResponse::success(packages),
        Err(ListServicePackagesError::QueryFailed(msg)) => {
            error!("Failed to list service packages: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
