use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::calculator::adapter::incoming::web::routes::{
    CatalogResponse, EstimateRequest, TransitionRequest, TransitionResponse,
};
use crate::modules::blog::application::ports::incoming::use_cases::{BlogArticle, BlogPostList};
use crate::modules::inquiry::application::domain::{Inquiry, InquiryForm};
use crate::modules::portfolio::application::ports::incoming::use_cases::PortfolioListing;
use crate::modules::service_package::application::domain::ServicePackage;
use crate::modules::settings::application::domain::{ContactSettings, SocialLinks};
use crate::site::adapter::incoming::web::routes::ResolvedPageResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stachbit Agency Site API",
        version = "1.0.0",
        description = "Public API behind the agency marketing site: blog, services, portfolio, pricing calculator and inquiries",
        contact(
            name = "Stachbit",
            email = "hello@stachbit.in"
        )
    ),
    paths(
        // Site
        crate::site::adapter::incoming::web::routes::resolve_page_handler,

        // Blog
        crate::modules::blog::adapter::incoming::web::routes::get_blog_posts_handler,
        crate::modules::blog::adapter::incoming::web::routes::get_blog_categories_handler,
        crate::modules::blog::adapter::incoming::web::routes::get_blog_post_handler,

        // Services and pricing
        crate::modules::service_package::adapter::incoming::web::routes::get_service_packages_handler,
        crate::calculator::adapter::incoming::web::routes::get_catalog_handler,
        crate::calculator::adapter::incoming::web::routes::estimate_handler,
        crate::calculator::adapter::incoming::web::routes::transition_handler,

        // Portfolio
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,

        // Inquiries
        crate::modules::inquiry::adapter::incoming::web::routes::submit_inquiry_handler,

        // Settings
        crate::modules::settings::adapter::incoming::web::routes::get_contact_settings_handler,
        crate::modules::settings::adapter::incoming::web::routes::get_social_links_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            ResolvedPageResponse,
            BlogPostList,
            BlogArticle,
            ServicePackage,
            CatalogResponse,
            EstimateRequest,
            TransitionRequest,
            TransitionResponse,
            PortfolioListing,
            InquiryForm,
            Inquiry,
            ContactSettings,
            SocialLinks
        )
    ),
    tags(
        (name = "site", description = "Page resolution and SEO metadata"),
        (name = "blog", description = "Published blog posts"),
        (name = "services", description = "Service packages"),
        (name = "calculator", description = "Project cost calculator"),
        (name = "portfolio", description = "Portfolio showcase"),
        (name = "inquiries", description = "Contact and quote requests"),
        (name = "settings", description = "Public contact details and social links"),
    )
)]
pub struct ApiDoc;
