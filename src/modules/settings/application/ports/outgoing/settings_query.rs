use async_trait::async_trait;

use crate::modules::settings::application::domain::SettingRow;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Active rows only; merging and defaults belong to the caller.
#[async_trait]
pub trait SettingsQuery: Send + Sync {
    async fn contact_rows(&self) -> Result<Vec<SettingRow>, SettingsQueryError>;

    async fn social_rows(&self) -> Result<Vec<SettingRow>, SettingsQueryError>;
}
