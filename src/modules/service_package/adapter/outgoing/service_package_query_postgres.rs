use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use crate::modules::service_package::adapter::outgoing::sea_orm_entity::service_packages::{
    self, Column, Entity,
};
use crate::modules::service_package::application::domain::ServicePackage;
use crate::modules::service_package::application::ports::outgoing::{
    ServicePackageQuery, ServicePackageQueryError,
};
use crate::shared::domain::ServiceType;

#[derive(Clone)]
pub struct ServicePackageQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServicePackageQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServicePackageQuery for ServicePackageQueryPostgres {
    async fn list_active(
        &self,
        service_type: Option<ServiceType>,
    ) -> Result<Vec<ServicePackage>, ServicePackageQueryError> {
        let mut query = Entity::find().filter(Column::IsActive.eq(true));

        if let Some(service_type) = service_type {
            query = query.filter(Column::ServiceType.eq(service_type.as_str()));
        }

        query
            .order_by_asc(Column::BasePrice)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_package)
            .collect()
    }
}

fn model_to_package(
    model: service_packages::Model,
) -> Result<ServicePackage, ServicePackageQueryError> {
    let service_type = model
        .service_type
        .parse::<ServiceType>()
        .map_err(|e| ServicePackageQueryError::SerializationError(e.to_string()))?;

    let features = serde_json::from_value(model.features)
        .map_err(|e| ServicePackageQueryError::SerializationError(e.to_string()))?;

    Ok(ServicePackage {
        id: model.id,
        service_type,
        name: model.name,
        description: model.description,
        base_price: model.base_price,
        features,
        delivery_days: model.delivery_days,
        is_popular: model.is_popular,
        is_active: model.is_active,
        created_at: model.created_at.into(),
    })
}

fn map_db_err(e: DbErr) -> ServicePackageQueryError {
    ServicePackageQueryError::DatabaseError(e.to_string())
}
