pub mod site_contact_settings;
pub mod site_social_links;
