mod portfolio_query_postgres;
pub mod sea_orm_entity;

pub use portfolio_query_postgres::PortfolioQueryPostgres;
