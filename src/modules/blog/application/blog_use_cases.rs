use std::sync::Arc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogCategoriesUseCase, GetBlogPostUseCase, ListBlogPostsUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub list: Arc<dyn ListBlogPostsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetBlogPostUseCase + Send + Sync>,
    pub categories: Arc<dyn GetBlogCategoriesUseCase + Send + Sync>,
}
