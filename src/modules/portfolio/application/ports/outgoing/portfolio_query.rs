use async_trait::async_trait;

use crate::modules::portfolio::application::domain::{PortfolioFilter, PortfolioProject};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    /// Active projects by ascending display order.
    async fn list_active(
        &self,
        filter: PortfolioFilter,
    ) -> Result<Vec<PortfolioProject>, PortfolioQueryError>;
}
