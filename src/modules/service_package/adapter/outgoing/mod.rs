pub mod sea_orm_entity;
mod service_package_query_postgres;

pub use service_package_query_postgres::ServicePackageQueryPostgres;
