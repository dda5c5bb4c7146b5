pub mod get_contact_settings;
pub mod get_social_links;

pub use get_contact_settings::*;
pub use get_social_links::*;
