use async_trait::async_trait;
use tracing::{debug, warn};

use crate::modules::portfolio::application::domain::{demo_projects, PortfolioFilter};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, PortfolioListing, PortfolioSource,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;

pub struct GetPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn demo_listing(filter: PortfolioFilter) -> PortfolioListing {
    PortfolioListing {
        source: PortfolioSource::Demo,
        projects: demo_projects()
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect(),
    }
}

#[async_trait]
impl<Q> GetPortfolioUseCase for GetPortfolioService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, filter: PortfolioFilter) -> PortfolioListing {
        match self.query.list_active(filter).await {
            Ok(projects) if !projects.is_empty() => PortfolioListing {
                source: PortfolioSource::Live,
                projects,
            },
            Ok(_) => {
                debug!("No portfolio projects stored, serving demo projects");
                demo_listing(filter)
            }
            Err(e) => {
                warn!(error = %e, "Portfolio query failed, serving demo projects");
                demo_listing(filter)
            }
        }
    }
}
