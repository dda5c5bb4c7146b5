use async_trait::async_trait;

use crate::modules::service_package::application::domain::ServicePackage;
use crate::shared::domain::ServiceType;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServicePackageQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ServicePackageQuery: Send + Sync {
    /// Active packages, cheapest first.
    async fn list_active(
        &self,
        service_type: Option<ServiceType>,
    ) -> Result<Vec<ServicePackage>, ServicePackageQueryError>;
}
