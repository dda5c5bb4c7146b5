use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::ServiceType;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PortfolioProject {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub service_type: Option<ServiceType>,
    pub client_name: Option<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub technologies: Vec<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortfolioFilter {
    pub service_type: Option<ServiceType>,
    /// `true` keeps featured projects only
    pub featured: bool,
}

impl PortfolioFilter {
    pub fn matches(&self, project: &PortfolioProject) -> bool {
        let type_ok = self
            .service_type
            .is_none_or(|wanted| project.service_type == Some(wanted));

        type_ok && (!self.featured || project.is_featured)
    }
}
