use actix_web::{http::StatusCode, post, web, Responder};
use tracing::error;

use crate::{
    modules::inquiry::application::{
        domain::InquiryForm, ports::incoming::use_cases::SubmitInquiryError,
    },
    shared::api::ApiResponse,
    AppState,
};

const SUBMISSION_FAILED_MESSAGE: &str =
    "Failed to submit form. Please try again or email us directly.";

#[utoipa::path(
    post,
    path = "/api/inquiries",
    tag = "inquiries",
    request_body = InquiryForm,
    responses(
        (status = 201, description = "Inquiry stored", body = crate::modules::inquiry::application::domain::Inquiry),
        (status = 400, description = "Missing fields or invalid email", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Inquiry could not be stored", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/inquiries")]
pub async fn submit_inquiry_handler(
    form: web::Json<InquiryForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.submit_inquiry.execute(form.into_inner()).await {
        Ok(inquiry) => ApiResponse::created(inquiry),

        Err(SubmitInquiryError::Invalid(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(SubmitInquiryError::SubmissionFailed(msg)) => {
            error!("Failed to store inquiry: {}", msg);
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "SUBMISSION_FAILED",
                SUBMISSION_FAILED_MESSAGE,
            )
        }
    }
}
