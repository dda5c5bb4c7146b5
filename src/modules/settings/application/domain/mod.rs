pub mod contact;
pub mod social;

pub use contact::ContactSettings;
pub use social::SocialLinks;

use std::collections::HashMap;

/// One active key/value row from a settings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingRow {
    pub key: String,
    pub value: Option<String>,
}

impl SettingRow {
    pub fn new(key: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            key: key.into(),
            value: value.map(str::to_string),
        }
    }
}

/// Present, non-blank values by key. Later rows win.
pub(crate) fn present_values(rows: impl IntoIterator<Item = SettingRow>) -> HashMap<String, String> {
    rows.into_iter()
        .filter_map(|row| {
            let value = row.value?.trim().to_string();
            (!value.is_empty()).then_some((row.key, value))
        })
        .collect()
}
