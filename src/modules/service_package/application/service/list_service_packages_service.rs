use async_trait::async_trait;

use crate::modules::service_package::application::domain::ServicePackage;
use crate::modules::service_package::application::ports::incoming::use_cases::{
    ListServicePackagesError, ListServicePackagesUseCase,
};
use crate::modules::service_package::application::ports::outgoing::ServicePackageQuery;
use crate::shared::domain::ServiceType;

pub struct ListServicePackagesService<Q>
where
    Q: ServicePackageQuery,
{
    query: Q,
}

impl<Q> ListServicePackagesService<Q>
where
    Q: ServicePackageQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListServicePackagesUseCase for ListServicePackagesService<Q>
where
    Q: ServicePackageQuery + Send + Sync,
{
    async fn execute(
        &self,
        service_type: Option<ServiceType>,
    ) -> Result<Vec<ServicePackage>, ListServicePackagesError> {
        Ok(self.query.list_active(service_type).await?)
    }
}
