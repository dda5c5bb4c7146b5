use async_trait::async_trait;
use tracing::warn;

use crate::modules::settings::application::domain::SocialLinks;
use crate::modules::settings::application::ports::incoming::use_cases::GetSocialLinksUseCase;
use crate::modules::settings::application::ports::outgoing::SettingsQuery;

pub struct GetSocialLinksService<Q>
where
    Q: SettingsQuery,
{
    query: Q,
}

impl<Q> GetSocialLinksService<Q>
where
    Q: SettingsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSocialLinksUseCase for GetSocialLinksService<Q>
where
    Q: SettingsQuery + Send + Sync,
{
    async fn execute(&self) -> SocialLinks {
        match self.query.social_rows().await {
            Ok(rows) => SocialLinks::from_rows(rows),
            Err(e) => {
                warn!(error = %e, "Social links unavailable, using defaults");
                SocialLinks::default()
            }
        }
    }
}
