use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::settings::adapter::outgoing::sea_orm_entity::{
    site_contact_settings, site_social_links,
};
use crate::modules::settings::application::domain::SettingRow;
use crate::modules::settings::application::ports::outgoing::{SettingsQuery, SettingsQueryError};

#[derive(Clone)]
pub struct SettingsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsQuery for SettingsQueryPostgres {
    async fn contact_rows(&self) -> Result<Vec<SettingRow>, SettingsQueryError> {
        let rows = site_contact_settings::Entity::find()
            .filter(site_contact_settings::Column::IsActive.eq(true))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| SettingRow {
                key: row.setting_key,
                value: row.setting_value,
            })
            .collect())
    }

    async fn social_rows(&self) -> Result<Vec<SettingRow>, SettingsQueryError> {
        let rows = site_social_links::Entity::find()
            .filter(site_social_links::Column::IsActive.eq(true))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| SettingRow {
                key: row.platform,
                value: row.url,
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> SettingsQueryError {
    SettingsQueryError::DatabaseError(e.to_string())
}
