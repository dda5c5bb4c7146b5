use serde::Serialize;
use utoipa::ToSchema;

/// Public identity of the site: brand name and canonical origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SiteProfile {
    pub name: String,
    /// Origin without a trailing slash, e.g. `https://stachbit.in`
    pub base_url: String,
}

impl SiteProfile {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            name: name.into(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a site-relative path. `None` yields the origin itself.
    pub fn absolute_url(&self, path: Option<&str>) -> String {
        match path {
            Some(path) if !path.is_empty() => format!("{}{}", self.base_url, path),
            _ => self.base_url.clone(),
        }
    }

    pub fn default_image(&self) -> String {
        format!("{}/og-default.png", self.base_url)
    }

    pub fn logo_url(&self) -> String {
        format!("{}/logo.png", self.base_url)
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self::new("Stachbit", "https://stachbit.in")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_origin() {
        let profile = SiteProfile::new("Acme", "https://acme.test///");
        assert_eq!(profile.base_url, "https://acme.test");
        assert_eq!(profile.absolute_url(Some("/blog")), "https://acme.test/blog");
    }

    #[test]
    fn absolute_url_without_path_is_origin() {
        let profile = SiteProfile::default();
        assert_eq!(profile.absolute_url(None), "https://stachbit.in");
        assert_eq!(profile.absolute_url(Some("")), "https://stachbit.in");
    }

    #[test]
    fn derived_asset_urls() {
        let profile = SiteProfile::default();
        assert_eq!(profile.default_image(), "https://stachbit.in/og-default.png");
        assert_eq!(profile.logo_url(), "https://stachbit.in/logo.png");
    }
}
