use async_trait::async_trait;

use crate::modules::service_package::application::domain::ServicePackage;
use crate::modules::service_package::application::ports::outgoing::ServicePackageQueryError;
use crate::shared::domain::ServiceType;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListServicePackagesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ServicePackageQueryError> for ListServicePackagesError {
    fn from(err: ServicePackageQueryError) -> Self {
        ListServicePackagesError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait ListServicePackagesUseCase: Send + Sync {
    async fn execute(
        &self,
        service_type: Option<ServiceType>,
    ) -> Result<Vec<ServicePackage>, ListServicePackagesError>;
}
