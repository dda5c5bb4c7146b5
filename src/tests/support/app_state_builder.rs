use actix_web::web;
use std::sync::Arc;

use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogCategoriesUseCase, GetBlogPostUseCase, ListBlogPostsUseCase,
};
use crate::modules::inquiry::application::ports::incoming::use_cases::SubmitInquiryUseCase;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioUseCase;
use crate::modules::service_package::application::ports::incoming::use_cases::ListServicePackagesUseCase;
use crate::modules::settings::application::ports::incoming::use_cases::{
    GetContactSettingsUseCase, GetSocialLinksUseCase,
};
use crate::site::application::domain::SiteProfile;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as a harmless stub; tests swap in the one under test.
pub struct TestAppStateBuilder {
    site: SiteProfile,
    blog: BlogUseCases,
    submit_inquiry: Arc<dyn SubmitInquiryUseCase + Send + Sync>,
    list_service_packages: Arc<dyn ListServicePackagesUseCase + Send + Sync>,
    get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    get_contact_settings: Arc<dyn GetContactSettingsUseCase + Send + Sync>,
    get_social_links: Arc<dyn GetSocialLinksUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            site: SiteProfile::default(),
            blog: BlogUseCases {
                list: Arc::new(StubListBlogPostsUseCase),
                get_single: Arc::new(StubGetBlogPostUseCase),
                categories: Arc::new(StubGetBlogCategoriesUseCase),
            },
            submit_inquiry: Arc::new(StubSubmitInquiryUseCase),
            list_service_packages: Arc::new(StubListServicePackagesUseCase),
            get_portfolio: Arc::new(StubGetPortfolioUseCase),
            get_contact_settings: Arc::new(StubGetContactSettingsUseCase),
            get_social_links: Arc::new(StubGetSocialLinksUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_site(mut self, site: SiteProfile) -> Self {
        self.site = site;
        self
    }

    pub fn with_list_blog_posts(
        mut self,
        uc: impl ListBlogPostsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog.list = Arc::new(uc);
        self
    }

    pub fn with_get_blog_post(mut self, uc: impl GetBlogPostUseCase + Send + Sync + 'static) -> Self {
        self.blog.get_single = Arc::new(uc);
        self
    }

    pub fn with_blog_categories(
        mut self,
        uc: impl GetBlogCategoriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog.categories = Arc::new(uc);
        self
    }

    pub fn with_submit_inquiry(
        mut self,
        uc: impl SubmitInquiryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_inquiry = Arc::new(uc);
        self
    }

    pub fn with_list_service_packages(
        mut self,
        uc: impl ListServicePackagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_service_packages = Arc::new(uc);
        self
    }

    pub fn with_get_portfolio(
        mut self,
        uc: impl GetPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolio = Arc::new(uc);
        self
    }

    pub fn with_contact_settings(
        mut self,
        uc: impl GetContactSettingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_contact_settings = Arc::new(uc);
        self
    }

    pub fn with_social_links(
        mut self,
        uc: impl GetSocialLinksUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_social_links = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            site: self.site,
            blog: self.blog,
            submit_inquiry: self.submit_inquiry,
            list_service_packages: self.list_service_packages,
            get_portfolio: self.get_portfolio,
            get_contact_settings: self.get_contact_settings,
            get_social_links: self.get_social_links,
        })
    }
}
