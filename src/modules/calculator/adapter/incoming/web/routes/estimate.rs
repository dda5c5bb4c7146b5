use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::{
    calculator::application::domain::{
        estimate, CalculatorAction, CalculatorState, Estimate, EstimateError,
    },
    shared::{api::ApiResponse, domain::ServiceType},
};

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct EstimateRequest {
    pub service_type: Option<ServiceType>,
    pub package_index: Option<usize>,
    /// Defaults to the five included pages
    pub pages: Option<u32>,
    #[serde(default)]
    pub addons: Vec<String>,
}

impl From<EstimateRequest> for CalculatorState {
    fn from(req: EstimateRequest) -> Self {
        let defaults = CalculatorState::default();
        Self {
            service: req.service_type,
            package_index: req.package_index,
            addons: req.addons,
            pages: req.pages.unwrap_or(defaults.pages),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransitionRequest {
    #[serde(default)]
    pub state: CalculatorState,
    pub action: CalculatorAction,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TransitionResponse {
    pub state: CalculatorState,
    pub estimate: Estimate,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/calculator/estimate",
    tag = "calculator",
    request_body = EstimateRequest,
    responses(
        (status = 200, description = "Price breakdown and delivery estimate", body = Estimate),
        (status = 400, description = "Unknown package", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/calculator/estimate")]
pub async fn estimate_handler(payload: web::Json<EstimateRequest>) -> impl Responder {
    let state = CalculatorState::from(payload.into_inner());

    match estimate(&state) {
        Ok(result) => ApiResponse::success(result),
        Err(err) => map_estimate_error(err),
    }
}

#[utoipa::path(
    post,
    path = "/api/calculator/transition",
    tag = "calculator",
    request_body = TransitionRequest,
    responses(
        (status = 200, description = "Next calculator state and its estimate", body = TransitionResponse),
        (status = 400, description = "Unknown package", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/calculator/transition")]
pub async fn transition_handler(payload: web::Json<TransitionRequest>) -> impl Responder {
    let TransitionRequest { state, action } = payload.into_inner();
    let next = state.apply(action);

    match estimate(&next) {
        Ok(result) => ApiResponse::success(TransitionResponse {
            state: next,
            estimate: result,
        }),
        Err(err) => map_estimate_error(err),
    }
}

fn map_estimate_error(err: EstimateError) -> HttpResponse {
    debug!(error = %err, "Rejected calculator selection");
    match err {
        EstimateError::UnknownPackage { .. } => {
            ApiResponse::bad_request("UNKNOWN_PACKAGE", &err.to_string())
        }
    }
}
