mod get_contact_settings;
mod get_social_links;

pub use get_contact_settings::*;
pub use get_social_links::*;
