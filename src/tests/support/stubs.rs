use async_trait::async_trait;

use crate::modules::blog::application::ports::incoming::use_cases::{
    BlogArticle, BlogPostList, GetBlogCategoriesError, GetBlogCategoriesUseCase,
    GetBlogPostError, GetBlogPostUseCase, ListBlogPostsError, ListBlogPostsUseCase, ViewContext,
};
use crate::modules::blog::application::ports::outgoing::{BlogListFilter, PageWindow};
use crate::modules::inquiry::application::domain::{Inquiry, InquiryForm};
use crate::modules::inquiry::application::ports::incoming::use_cases::{
    SubmitInquiryError, SubmitInquiryUseCase,
};
use crate::modules::portfolio::application::domain::{demo_projects, PortfolioFilter};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, PortfolioListing, PortfolioSource,
};
use crate::modules::service_package::application::domain::ServicePackage;
use crate::modules::service_package::application::ports::incoming::use_cases::{
    ListServicePackagesError, ListServicePackagesUseCase,
};
use crate::modules::settings::application::domain::{ContactSettings, SocialLinks};
use crate::modules::settings::application::ports::incoming::use_cases::{
    GetContactSettingsUseCase, GetSocialLinksUseCase,
};
use crate::shared::domain::ServiceType;

// ────────────────────────────────────────────────
// Blog
// ────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubListBlogPostsUseCase;

#[async_trait]
impl ListBlogPostsUseCase for StubListBlogPostsUseCase {
    async fn execute(
        &self,
        _filter: BlogListFilter,
        _window: PageWindow,
    ) -> Result<BlogPostList, ListBlogPostsError> {
        Ok(BlogPostList {
            items: vec![],
            total: 0,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubGetBlogPostUseCase;

#[async_trait]
impl GetBlogPostUseCase for StubGetBlogPostUseCase {
    async fn execute(
        &self,
        _slug: &str,
        _context: ViewContext,
    ) -> Result<BlogArticle, GetBlogPostError> {
        Err(GetBlogPostError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubGetBlogCategoriesUseCase;

#[async_trait]
impl GetBlogCategoriesUseCase for StubGetBlogCategoriesUseCase {
    async fn execute(&self) -> Result<Vec<String>, GetBlogCategoriesError> {
        Ok(vec![])
    }
}

// ────────────────────────────────────────────────
// Inquiries
// ────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubSubmitInquiryUseCase;

#[async_trait]
impl SubmitInquiryUseCase for StubSubmitInquiryUseCase {
    async fn execute(&self, _form: InquiryForm) -> Result<Inquiry, SubmitInquiryError> {
        Err(SubmitInquiryError::SubmissionFailed(
            "Not used in this test".to_string(),
        ))
    }
}

// ────────────────────────────────────────────────
// Catalogue content
// ────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubListServicePackagesUseCase;

#[async_trait]
impl ListServicePackagesUseCase for StubListServicePackagesUseCase {
    async fn execute(
        &self,
        _service_type: Option<ServiceType>,
    ) -> Result<Vec<ServicePackage>, ListServicePackagesError> {
        Ok(vec![])
    }
}

/// Serves the demo showcase, like the real service with an empty table.
#[derive(Default, Clone)]
pub struct StubGetPortfolioUseCase;

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self, filter: PortfolioFilter) -> PortfolioListing {
        PortfolioListing {
            source: PortfolioSource::Demo,
            projects: demo_projects()
                .into_iter()
                .filter(|p| filter.matches(p))
                .collect(),
        }
    }
}

#[derive(Default, Clone)]
pub struct StubGetContactSettingsUseCase;

#[async_trait]
impl GetContactSettingsUseCase for StubGetContactSettingsUseCase {
    async fn execute(&self) -> ContactSettings {
        ContactSettings::default()
    }
}

#[derive(Default, Clone)]
pub struct StubGetSocialLinksUseCase;

#[async_trait]
impl GetSocialLinksUseCase for StubGetSocialLinksUseCase {
    async fn execute(&self) -> SocialLinks {
        SocialLinks::default()
    }
}
