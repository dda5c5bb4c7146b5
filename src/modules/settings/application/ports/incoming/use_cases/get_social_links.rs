use async_trait::async_trait;

use crate::modules::settings::application::domain::SocialLinks;

#[async_trait]
pub trait GetSocialLinksUseCase: Send + Sync {
    async fn execute(&self) -> SocialLinks;
}
