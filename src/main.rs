pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::calculator;
pub use modules::site;

use crate::config::AppConfig;
use crate::modules::blog::adapter::outgoing::{BlogQueryPostgres, BlogViewRepositoryPostgres};
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::ports::outgoing::BlogViewRepository;
use crate::modules::blog::application::service::{
    GetBlogCategoriesService, GetBlogPostService, ListBlogPostsService,
};
use crate::modules::inquiry::adapter::outgoing::{InquiryRepositoryPostgres, WebhookInquiryNotifier};
use crate::modules::inquiry::application::ports::incoming::use_cases::SubmitInquiryUseCase;
use crate::modules::inquiry::application::service::SubmitInquiryService;
use crate::modules::portfolio::adapter::outgoing::PortfolioQueryPostgres;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioUseCase;
use crate::modules::portfolio::application::service::GetPortfolioService;
use crate::modules::service_package::adapter::outgoing::ServicePackageQueryPostgres;
use crate::modules::service_package::application::ports::incoming::use_cases::ListServicePackagesUseCase;
use crate::modules::service_package::application::service::ListServicePackagesService;
use crate::modules::settings::adapter::outgoing::SettingsQueryPostgres;
use crate::modules::settings::application::ports::incoming::use_cases::{
    GetContactSettingsUseCase, GetSocialLinksUseCase,
};
use crate::modules::settings::application::service::{
    GetContactSettingsService, GetSocialLinksService,
};
use crate::shared::api::{custom_json_config, json_config::custom_query_config};
use crate::site::application::domain::SiteProfile;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub site: SiteProfile,
    pub blog: BlogUseCases,
    pub submit_inquiry: Arc<dyn SubmitInquiryUseCase + Send + Sync>,
    pub list_service_packages: Arc<dyn ListServicePackagesUseCase + Send + Sync>,
    pub get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub get_contact_settings: Arc<dyn GetContactSettingsUseCase + Send + Sync>,
    pub get_social_links: Arc<dyn GetSocialLinksUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
    }

    let db_arc = Arc::new(conn);
    let state = build_state(&config, &db_arc)?;

    let db_for_server = Arc::clone(&db_arc);
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
            .default_service(web::to(
                crate::site::adapter::incoming::web::routes::unmatched_route_handler,
            ))
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    config: &AppConfig,
    db: &Arc<sea_orm::DatabaseConnection>,
) -> anyhow::Result<AppState> {
    // Blog
    let blog_query = BlogQueryPostgres::new(Arc::clone(db));
    let blog_views: Arc<dyn BlogViewRepository + Send + Sync> =
        Arc::new(BlogViewRepositoryPostgres::new(Arc::clone(db)));
    let blog = BlogUseCases {
        list: Arc::new(ListBlogPostsService::new(blog_query.clone())),
        get_single: Arc::new(GetBlogPostService::new(
            blog_query.clone(),
            blog_views,
            config.site.clone(),
        )),
        categories: Arc::new(GetBlogCategoriesService::new(blog_query)),
    };

    // Inquiries
    let mut submit_inquiry = SubmitInquiryService::new(
        InquiryRepositoryPostgres::new(Arc::clone(db)),
        config.notification_source.clone(),
    );
    match config.notification_url.as_deref() {
        Some(url) => {
            let notifier = WebhookInquiryNotifier::new(url)
                .context("Invalid NOTIFICATION_URL")?;
            info!("Inquiry notifications go to {}", notifier.endpoint());
            submit_inquiry = submit_inquiry.with_notifier(Arc::new(notifier));
        }
        None => warn!("NOTIFICATION_URL not set, inquiry notifications are disabled"),
    }

    // Catalogue content
    let settings_query = SettingsQueryPostgres::new(Arc::clone(db));

    Ok(AppState {
        site: config.site.clone(),
        blog,
        submit_inquiry: Arc::new(submit_inquiry),
        list_service_packages: Arc::new(ListServicePackagesService::new(
            ServicePackageQueryPostgres::new(Arc::clone(db)),
        )),
        get_portfolio: Arc::new(GetPortfolioService::new(PortfolioQueryPostgres::new(
            Arc::clone(db),
        ))),
        get_contact_settings: Arc::new(GetContactSettingsService::new(settings_query.clone())),
        get_social_links: Arc::new(GetSocialLinksService::new(settings_query)),
    })
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Site
    cfg.service(crate::site::adapter::incoming::web::routes::resolve_page_handler);
    // Blog; categories must be registered before the slug route
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_blog_posts_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_blog_categories_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_blog_post_handler);
    // Services and pricing
    cfg.service(
        crate::modules::service_package::adapter::incoming::web::routes::get_service_packages_handler,
    );
    cfg.service(crate::calculator::adapter::incoming::web::routes::get_catalog_handler);
    cfg.service(crate::calculator::adapter::incoming::web::routes::estimate_handler);
    cfg.service(crate::calculator::adapter::incoming::web::routes::transition_handler);
    // Portfolio
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    // Inquiries
    cfg.service(crate::modules::inquiry::adapter::incoming::web::routes::submit_inquiry_handler);
    // Settings
    cfg.service(
        crate::modules::settings::adapter::incoming::web::routes::get_contact_settings_handler,
    );
    cfg.service(crate::modules::settings::adapter::incoming::web::routes::get_social_links_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
