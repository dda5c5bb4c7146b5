use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::blog_views::{ActiveModel, Entity};
use crate::modules::blog::application::ports::outgoing::{
    BlogViewRepository, BlogViewRepositoryError, NewBlogView,
};

#[derive(Clone)]
pub struct BlogViewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogViewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogViewRepository for BlogViewRepositoryPostgres {
    async fn record(&self, view: NewBlogView) -> Result<(), BlogViewRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            blog_id: Set(view.blog_id),
            referrer: Set(view.referrer),
            user_agent: Set(view.user_agent),
            created_at: Set(Utc::now().fixed_offset()),
        };

        Entity::insert(model)
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> BlogViewRepositoryError {
    BlogViewRepositoryError::DatabaseError(e.to_string())
}
