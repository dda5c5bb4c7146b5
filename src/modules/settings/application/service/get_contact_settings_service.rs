use async_trait::async_trait;
use tracing::warn;

use crate::modules::settings::application::domain::ContactSettings;
use crate::modules::settings::application::ports::incoming::use_cases::GetContactSettingsUseCase;
use crate::modules::settings::application::ports::outgoing::SettingsQuery;

pub struct GetContactSettingsService<Q>
where
    Q: SettingsQuery,
{
    query: Q,
}

impl<Q> GetContactSettingsService<Q>
where
    Q: SettingsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetContactSettingsUseCase for GetContactSettingsService<Q>
where
    Q: SettingsQuery + Send + Sync,
{
    async fn execute(&self) -> ContactSettings {
        match self.query.contact_rows().await {
            Ok(rows) => ContactSettings::from_rows(rows),
            Err(e) => {
                warn!(error = %e, "Contact settings unavailable, using defaults");
                ContactSettings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::settings::application::domain::SettingRow;
    use crate::modules::settings::application::ports::outgoing::SettingsQueryError;

    struct MockSettingsQuery {
        contact: Result<Vec<SettingRow>, SettingsQueryError>,
    }

    #[async_trait]
    impl SettingsQuery for MockSettingsQuery {
        async fn contact_rows(&self) -> Result<Vec<SettingRow>, SettingsQueryError> {
            self.contact.clone()
        }

        async fn social_rows(&self) -> Result<Vec<SettingRow>, SettingsQueryError> {
            unreachable!("contact settings never read social links")
        }
    }

    #[tokio::test]
    async fn merges_stored_rows() {
        let service = GetContactSettingsService::new(MockSettingsQuery {
            contact: Ok(vec![SettingRow::new("contact_phone", Some("+91 11111 22222"))]),
        });

        let settings = service.execute().await;

        assert_eq!(settings.contact_phone, "+91 11111 22222");
        assert_eq!(settings.contact_email, "hello@stachbit.in");
    }

    #[tokio::test]
    async fn read_error_yields_defaults() {
        let service = GetContactSettingsService::new(MockSettingsQuery {
            contact: Err(SettingsQueryError::DatabaseError("down".to_string())),
        });

        assert_eq!(service.execute().await, ContactSettings::default());
    }
}
