pub mod demo;
pub mod entities;

pub use demo::demo_projects;
pub use entities::{PortfolioFilter, PortfolioProject};
