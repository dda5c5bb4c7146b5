use async_trait::async_trait;

use crate::modules::settings::application::domain::ContactSettings;

#[async_trait]
pub trait GetContactSettingsUseCase: Send + Sync {
    async fn execute(&self) -> ContactSettings;
}
