use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::ServiceType;

/// A priced offering shown on the services page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ServicePackage {
    pub id: Uuid,
    pub service_type: ServiceType,
    pub name: String,
    pub description: Option<String>,
    /// Whole rupees
    pub base_price: i64,
    pub features: Vec<String>,
    pub delivery_days: Option<i32>,
    pub is_popular: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
