use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::inquiry::application::domain::{Inquiry, InquiryForm, SubmitInquiryCommand};
use crate::modules::inquiry::application::ports::incoming::use_cases::{
    SubmitInquiryError, SubmitInquiryUseCase,
};
use crate::modules::inquiry::application::ports::outgoing::{
    InquiryNotification, InquiryNotifier, InquiryRepository,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct SubmitInquiryService<R>
where
    R: InquiryRepository,
{
    repository: R,
    notifier: Option<Arc<dyn InquiryNotifier + Send + Sync>>,
    source: String,
}

impl<R> SubmitInquiryService<R>
where
    R: InquiryRepository,
{
    pub fn new(repository: R, source: impl Into<String>) -> Self {
        Self {
            repository,
            notifier: None,
            source: source.into(),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn InquiryNotifier + Send + Sync>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    fn notify(&self, inquiry: &Inquiry) {
        let Some(notifier) = self.notifier.as_ref().map(Arc::clone) else {
            return;
        };
        let notification = InquiryNotification::for_inquiry(inquiry, &self.source);
        let inquiry_id = inquiry.id;

        tokio::spawn(async move {
            if let Err(e) = notifier.notify(notification).await {
                warn!(inquiry_id = %inquiry_id, error = %e, "Inquiry notification failed");
            }
        });
    }
}

#[async_trait]
impl<R> SubmitInquiryUseCase for SubmitInquiryService<R>
where
    R: InquiryRepository + Send + Sync,
{
    async fn execute(&self, form: InquiryForm) -> Result<Inquiry, SubmitInquiryError> {
        let command = SubmitInquiryCommand::try_from(form)?;
        let inquiry = self.repository.create(command).await?;

        info!(inquiry_id = %inquiry.id, "Inquiry stored");
        self.notify(&inquiry);

        Ok(inquiry)
    }
}

// ============================================================================
// Tests
// ============================================================================
