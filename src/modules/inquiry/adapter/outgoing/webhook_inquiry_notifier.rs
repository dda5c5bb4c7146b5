use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::modules::inquiry::application::ports::outgoing::{
    InquiryNotification, InquiryNotifier, InquiryNotifierError,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts inquiry notifications as JSON to a fixed endpoint.
#[derive(Clone)]
pub struct WebhookInquiryNotifier {
    client: reqwest::Client,
    endpoint: Url,
}

impl WebhookInquiryNotifier {
    pub fn new(endpoint: &str) -> Result<Self, InquiryNotifierError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| InquiryNotifierError::InvalidEndpoint(e.to_string()))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(InquiryNotifierError::InvalidEndpoint(format!(
                "unsupported scheme {}",
                endpoint.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| InquiryNotifierError::RequestFailed(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl InquiryNotifier for WebhookInquiryNotifier {
    async fn notify(&self, notification: InquiryNotification) -> Result<(), InquiryNotifierError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&notification)
            .send()
            .await
            .map_err(|e| InquiryNotifierError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InquiryNotifierError::Rejected(status.as_u16()));
        }

        debug!(endpoint = %self.endpoint, "Inquiry notification delivered");
        Ok(())
    }
}
