use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use tracing::warn;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolio_projects::{
    self, Column, Entity,
};
use crate::modules::portfolio::application::domain::{PortfolioFilter, PortfolioProject};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};
use crate::shared::domain::ServiceType;

#[derive(Clone)]
pub struct PortfolioQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgres {
    async fn list_active(
        &self,
        filter: PortfolioFilter,
    ) -> Result<Vec<PortfolioProject>, PortfolioQueryError> {
        let mut query = Entity::find().filter(Column::IsActive.eq(true));

        if let Some(service_type) = filter.service_type {
            query = query.filter(Column::ServiceType.eq(service_type.as_str()));
        }

        if filter.featured {
            query = query.filter(Column::IsFeatured.eq(true));
        }

        query
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_project)
            .collect()
    }
}

fn model_to_project(
    model: portfolio_projects::Model,
) -> Result<PortfolioProject, PortfolioQueryError> {
    // Free-text column; unrecognised values only lose their filter tab
    let service_type = model.service_type.as_deref().and_then(|raw| {
        raw.parse::<ServiceType>()
            .inspect_err(|e| warn!(project_id = %model.id, error = %e, "Ignoring service type"))
            .ok()
    });

    let technologies = serde_json::from_value(model.technologies)
        .map_err(|e| PortfolioQueryError::SerializationError(e.to_string()))?;

    Ok(PortfolioProject {
        id: model.id,
        title: model.title,
        description: model.description,
        service_type,
        client_name: model.client_name,
        image_url: model.image_url,
        project_url: model.project_url,
        technologies,
        is_featured: model.is_featured,
        is_active: model.is_active,
        display_order: model.display_order,
        created_at: model.created_at.into(),
    })
}

fn map_db_err(e: DbErr) -> PortfolioQueryError {
    PortfolioQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn model(title: &str, service_type: Option<&str>, order: i32) -> portfolio_projects::Model {
        portfolio_projects::Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            service_type: service_type.map(str::to_string),
            client_name: Some("Acme".to_string()),
            image_url: None,
            project_url: Some("https://acme.test".to_string()),
            technologies: serde_json::json!(["Rust", "Postgres"]),
            is_featured: true,
            is_active: true,
            display_order: order,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_list_active_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model("Clinic Portal", Some("saas"), 1),
                model("Legacy Import", Some("mainframe"), 2),
            ]])
            .into_connection();

        let query = PortfolioQueryPostgres::new(Arc::new(db));
        let projects = query.list_active(PortfolioFilter::default()).await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].service_type, Some(ServiceType::Saas));
        assert_eq!(projects[0].technologies, vec!["Rust", "Postgres"]);
        assert_eq!(projects[1].service_type, None);
    }

    #[tokio::test]
    async fn test_list_active_applies_filters() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<portfolio_projects::Model>::new()])
                .into_connection(),
        );

        let query = PortfolioQueryPostgres::new(Arc::clone(&db));
        let filter = PortfolioFilter {
            service_type: Some(ServiceType::Custom),
            featured: true,
        };
        let projects = query.list_active(filter).await.unwrap();
        assert!(projects.is_empty());
        drop(query);

        let log = Arc::try_unwrap(db).ok().unwrap().into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("is_featured"));
        assert!(sql.contains("custom"));
        assert!(sql.contains("display_order"));
    }

    #[tokio::test]
    async fn test_list_active_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection error".to_string())])
            .into_connection();

        let query = PortfolioQueryPostgres::new(Arc::new(db));
        let result = query.list_active(PortfolioFilter::default()).await;

        assert!(matches!(result, Err(PortfolioQueryError::DatabaseError(_))));
    }
}
