pub mod settings_query;

pub use settings_query::{SettingsQuery, SettingsQueryError};
