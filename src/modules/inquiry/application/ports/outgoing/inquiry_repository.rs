use async_trait::async_trait;

use crate::modules::inquiry::application::domain::{Inquiry, SubmitInquiryCommand};

#[derive(Debug, Clone, thiserror::Error)]
pub enum InquiryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored inquiry is invalid: {0}")]
    InvalidRow(String),
}

#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// Insert with status `new` and return the stored row.
    async fn create(
        &self,
        inquiry: SubmitInquiryCommand,
    ) -> Result<Inquiry, InquiryRepositoryError>;
}
