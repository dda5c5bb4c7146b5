mod estimate;
mod get_catalog;

pub use estimate::*;
pub use get_catalog::*;
