pub mod entities;
pub mod markup;
pub mod read_time;

pub use entities::{BlogPost, BlogPostSummary};
pub use markup::{render, Block, Span};
