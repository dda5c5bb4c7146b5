use async_trait::async_trait;

use crate::modules::inquiry::application::domain::{
    Inquiry, InquiryForm, SubmitInquiryCommandError,
};
use crate::modules::inquiry::application::ports::outgoing::InquiryRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitInquiryError {
    #[error(transparent)]
    Invalid(#[from] SubmitInquiryCommandError),

    #[error("Submission failed: {0}")]
    SubmissionFailed(String),
}

impl From<InquiryRepositoryError> for SubmitInquiryError {
    fn from(err: InquiryRepositoryError) -> Self {
        SubmitInquiryError::SubmissionFailed(err.to_string())
    }
}

#[async_trait]
pub trait SubmitInquiryUseCase: Send + Sync {
    async fn execute(&self, form: InquiryForm) -> Result<Inquiry, SubmitInquiryError>;
}
