use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::inquiry::adapter::outgoing::sea_orm_entity::website_inquiries::{
    self, ActiveModel,
};
use crate::modules::inquiry::application::domain::{
    Inquiry, InquiryStatus, SubmitInquiryCommand,
};
use crate::modules::inquiry::application::ports::outgoing::{
    InquiryRepository, InquiryRepositoryError,
};
use crate::shared::domain::ServiceType;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct InquiryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InquiryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InquiryRepository for InquiryRepositoryPostgres {
    async fn create(
        &self,
        inquiry: SubmitInquiryCommand,
    ) -> Result<Inquiry, InquiryRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(inquiry.name),
            email: Set(inquiry.email),
            phone: Set(inquiry.phone),
            company: Set(inquiry.company),
            service_interest: Set(inquiry.service_interest.map(|s| s.as_str().to_string())),
            budget_range: Set(inquiry.budget_range),
            message: Set(inquiry.message),
            status: Set(InquiryStatus::New.as_str().to_string()),
            admin_notes: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let stored = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_inquiry(stored)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_inquiry(model: website_inquiries::Model) -> Result<Inquiry, InquiryRepositoryError> {
    let service_interest = model
        .service_interest
        .as_deref()
        .map(str::parse::<ServiceType>)
        .transpose()
        .map_err(|e| InquiryRepositoryError::InvalidRow(format!("{}", e)))?;

    let status = model
        .status
        .parse::<InquiryStatus>()
        .map_err(|e| InquiryRepositoryError::InvalidRow(format!("{}", e)))?;

    Ok(Inquiry {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        company: model.company,
        service_interest,
        budget_range: model.budget_range,
        message: model.message,
        status,
        admin_notes: model.admin_notes,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> InquiryRepositoryError {
    InquiryRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
