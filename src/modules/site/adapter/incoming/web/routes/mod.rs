mod fallback;
mod resolve_page;

pub use fallback::unmatched_route_handler;
pub use resolve_page::*;
