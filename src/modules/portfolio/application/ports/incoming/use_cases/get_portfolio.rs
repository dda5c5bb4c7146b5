use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::portfolio::application::domain::{PortfolioFilter, PortfolioProject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioSource {
    Live,
    Demo,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PortfolioListing {
    pub source: PortfolioSource,
    pub projects: Vec<PortfolioProject>,
}

/// Always answers; read failures fall back to the demo showcase.
#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self, filter: PortfolioFilter) -> PortfolioListing;
}
