use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::ServiceType;

/// Follow-up stage of an inquiry. Only `New` is ever written by this service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    #[default]
    New,
    Contacted,
    InProgress,
    Completed,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::Contacted => "contacted",
            InquiryStatus::InProgress => "in_progress",
            InquiryStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown inquiry status: {0}")]
pub struct UnknownInquiryStatus(pub String);

impl FromStr for InquiryStatus {
    type Err = UnknownInquiryStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(InquiryStatus::New),
            "contacted" => Ok(InquiryStatus::Contacted),
            "in_progress" => Ok(InquiryStatus::InProgress),
            "completed" => Ok(InquiryStatus::Completed),
            other => Err(UnknownInquiryStatus(other.to_string())),
        }
    }
}

/// A stored contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service_interest: Option<ServiceType>,
    pub budget_range: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    #[serde(skip_serializing)]
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
