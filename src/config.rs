use std::env;

use crate::site::application::domain::SiteProfile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub run_migrations: bool,
    /// Inquiry webhook; notifications are skipped when unset
    pub notification_url: Option<String>,
    pub notification_source: String,
    pub site: SiteProfile,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = non_empty("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = non_empty("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match non_empty("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => 8080,
        };

        let run_migrations = match non_empty("RUN_MIGRATIONS") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                key: "RUN_MIGRATIONS",
                value: raw,
            })?,
            None => false,
        };

        let site = SiteProfile::new(
            non_empty("SITE_NAME").unwrap_or_else(|| "Stachbit".to_string()),
            non_empty("SITE_BASE_URL").unwrap_or_else(|| "https://stachbit.in".to_string()),
        );

        Ok(Self {
            database_url,
            host,
            port,
            run_migrations,
            notification_url: non_empty("NOTIFICATION_URL"),
            notification_source: non_empty("NOTIFICATION_SOURCE")
                .unwrap_or_else(|| "stachbit.in".to_string()),
            site,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
