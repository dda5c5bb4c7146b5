pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_website_inquiries;
mod m20260301_000002_create_table_service_packages;
mod m20260301_000003_create_table_portfolio_projects;
mod m20260301_000004_create_table_blog_posts;
mod m20260301_000005_create_table_blog_views;
mod m20260301_000006_create_table_site_settings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_website_inquiries::Migration),
            Box::new(m20260301_000002_create_table_service_packages::Migration),
            Box::new(m20260301_000003_create_table_portfolio_projects::Migration),
            Box::new(m20260301_000004_create_table_blog_posts::Migration),
            Box::new(m20260301_000005_create_table_blog_views::Migration),
            Box::new(m20260301_000006_create_table_site_settings::Migration),
        ]
    }
}
