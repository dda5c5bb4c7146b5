pub mod blog_query;
pub mod blog_view_repository;

pub use blog_query::{
    BlogListFilter, BlogPage, BlogQuery, BlogQueryError, PageWindow, DEFAULT_PAGE_LIMIT,
};
pub use blog_view_repository::{BlogViewRepository, BlogViewRepositoryError, NewBlogView};
