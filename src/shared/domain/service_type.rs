use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// The four lines of business the agency sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    WebDev,
    Saas,
    Android,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown service type: {0}")]
pub struct UnknownServiceType(pub String);

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::WebDev,
        ServiceType::Saas,
        ServiceType::Android,
        ServiceType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::WebDev => "web_dev",
            ServiceType::Saas => "saas",
            ServiceType::Android => "android",
            ServiceType::Custom => "custom",
        }
    }

    /// Optional query filter: absent or blank means "all services".
    pub fn parse_filter(raw: Option<&str>) -> Result<Option<ServiceType>, UnknownServiceType> {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }

    /// Human label used in catalog headings.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceType::WebDev => "Website Development",
            ServiceType::Saas => "SaaS Application",
            ServiceType::Android => "Android Application",
            ServiceType::Custom => "Custom Solution",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = UnknownServiceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "web_dev" => Ok(ServiceType::WebDev),
            "saas" => Ok(ServiceType::Saas),
            "android" => Ok(ServiceType::Android),
            "custom" => Ok(ServiceType::Custom),
            other => Err(UnknownServiceType(other.to_string())),
        }
    }
}
