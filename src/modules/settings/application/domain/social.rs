use serde::Serialize;
use utoipa::ToSchema;

use super::{present_values, SettingRow};

/// Profile URLs by platform. An empty string means "not linked".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SocialLinks {
    pub twitter: String,
    pub facebook: String,
    pub instagram: String,
    pub linkedin: String,
    pub youtube: String,
    pub github: String,
}

impl SocialLinks {
    pub fn from_rows(rows: impl IntoIterator<Item = SettingRow>) -> Self {
        let mut values = present_values(rows);
        let mut take = |platform: &str| values.remove(platform).unwrap_or_default();

        Self {
            twitter: take("twitter"),
            facebook: take("facebook"),
            instagram: take("instagram"),
            linkedin: take("linkedin"),
            youtube: take("youtube"),
            github: take("github"),
        }
    }
}
