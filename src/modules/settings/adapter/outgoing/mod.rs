pub mod sea_orm_entity;
mod settings_query_postgres;

pub use settings_query_postgres::SettingsQueryPostgres;
