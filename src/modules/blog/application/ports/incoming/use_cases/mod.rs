mod get_blog_categories;
mod get_blog_post;
mod list_blog_posts;

pub use get_blog_categories::{GetBlogCategoriesError, GetBlogCategoriesUseCase};
pub use get_blog_post::{BlogArticle, GetBlogPostError, GetBlogPostUseCase, ViewContext};
pub use list_blog_posts::{BlogPostList, ListBlogPostsError, ListBlogPostsUseCase};
