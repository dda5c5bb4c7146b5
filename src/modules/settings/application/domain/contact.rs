use serde::Serialize;
use utoipa::ToSchema;

use super::{present_values, SettingRow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactSettings {
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_location: String,
    pub contact_address: String,
    pub response_time: String,
    pub whatsapp_number: String,
    pub business_hours: String,
    pub support_email: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            contact_email: "hello@stachbit.in".to_string(),
            contact_phone: "+91 98765 43210".to_string(),
            contact_location: "India".to_string(),
            contact_address: String::new(),
            response_time: "Within 24 hours".to_string(),
            whatsapp_number: "+919876543210".to_string(),
            business_hours: "Mon-Fri: 9AM - 6PM IST".to_string(),
            support_email: "support@stachbit.in".to_string(),
        }
    }
}

impl ContactSettings {
    /// Defaults overridden field by field by stored rows. Unknown keys are ignored.
    pub fn from_rows(rows: impl IntoIterator<Item = SettingRow>) -> Self {
        let mut values = present_values(rows);
        let defaults = Self::default();
        let mut take = |key: &str, default: String| values.remove(key).unwrap_or(default);

        Self {
            contact_email: take("contact_email", defaults.contact_email),
            contact_phone: take("contact_phone", defaults.contact_phone),
            contact_location: take("contact_location", defaults.contact_location),
            contact_address: take("contact_address", defaults.contact_address),
            response_time: take("response_time", defaults.response_time),
            whatsapp_number: take("whatsapp_number", defaults.whatsapp_number),
            business_hours: take("business_hours", defaults.business_hours),
            support_email: take("support_email", defaults.support_email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_rows_gives_defaults() {
        assert_eq!(ContactSettings::from_rows(vec![]), ContactSettings::default());
    }

    #[test]
    fn present_rows_override_their_field_only() {
        let settings = ContactSettings::from_rows(vec![
            SettingRow::new("contact_email", Some("team@agency.test")),
            SettingRow::new("contact_address", Some("12 MG Road, Pune")),
            SettingRow::new("unrelated_key", Some("ignored")),
        ]);

        assert_eq!(settings.contact_email, "team@agency.test");
        assert_eq!(settings.contact_address, "12 MG Road, Pune");
        assert_eq!(settings.contact_phone, "+91 98765 43210");
        assert_eq!(settings.support_email, "support@stachbit.in");
    }

    #[test]
    fn empty_or_null_values_keep_defaults() {
        let settings = ContactSettings::from_rows(vec![
            SettingRow::new("contact_email", Some("")),
            SettingRow::new("business_hours", None),
            SettingRow::new("response_time", Some("   ")),
        ]);

        assert_eq!(settings, ContactSettings::default());
    }
}
