mod get_contact_settings_service;
mod get_social_links_service;

pub use get_contact_settings_service::GetContactSettingsService;
pub use get_social_links_service::GetSocialLinksService;
