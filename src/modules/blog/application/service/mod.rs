mod get_blog_categories_service;
mod get_blog_post_service;
mod list_blog_posts_service;

pub use get_blog_categories_service::GetBlogCategoriesService;
pub use get_blog_post_service::GetBlogPostService;
pub use list_blog_posts_service::ListBlogPostsService;
