pub mod blog_posts;
pub mod blog_views;
