mod blog_query_postgres;
mod blog_view_repository_postgres;
pub mod sea_orm_entity;

pub use blog_query_postgres::BlogQueryPostgres;
pub use blog_view_repository_postgres::BlogViewRepositoryPostgres;
