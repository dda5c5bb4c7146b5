use async_trait::async_trait;
use serde::Serialize;

use crate::modules::inquiry::application::domain::Inquiry;

/// Payload posted to the notification webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryNotification {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub source: String,
}

impl InquiryNotification {
    pub fn for_inquiry(inquiry: &Inquiry, source: &str) -> Self {
        Self {
            name: inquiry.name.clone(),
            email: inquiry.email.clone(),
            phone: inquiry.phone.clone(),
            subject: inquiry
                .service_interest
                .map(|service| format!("Inquiry: {}", service)),
            message: inquiry.message.clone(),
            source: source.to_string(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum InquiryNotifierError {
    #[error("Invalid notification endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Notification request failed: {0}")]
    RequestFailed(String),

    #[error("Notification endpoint answered {0}")]
    Rejected(u16),
}

#[async_trait]
pub trait InquiryNotifier: Send + Sync {
    async fn notify(&self, notification: InquiryNotification) -> Result<(), InquiryNotifierError>;
}
