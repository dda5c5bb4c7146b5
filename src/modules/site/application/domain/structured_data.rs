use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use super::profile::SiteProfile;

pub struct ArticleStructuredData<'a> {
    pub headline: &'a str,
    pub description: &'a str,
    pub image: Option<&'a str>,
    pub path: &'a str,
    pub author: &'a str,
    pub published: DateTime<Utc>,
    pub modified: Option<DateTime<Utc>>,
}

impl ArticleStructuredData<'_> {
    /// schema.org `Article` JSON-LD
    pub fn to_json_ld(&self, profile: &SiteProfile) -> Value {
        let url = profile.absolute_url(Some(self.path));
        let image = self
            .image
            .filter(|img| !img.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| profile.default_image());
        let published = self.published.to_rfc3339();
        let modified = self
            .modified
            .map(|m| m.to_rfc3339())
            .unwrap_or_else(|| published.clone());

        json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": self.headline,
            "description": self.description,
            "image": image,
            "url": url,
            "author": {
                "@type": "Person",
                "name": self.author,
            },
            "publisher": {
                "@type": "Organization",
                "name": profile.name,
                "logo": {
                    "@type": "ImageObject",
                    "url": profile.logo_url(),
                },
            },
            "datePublished": published,
            "dateModified": modified,
            "mainEntityOfPage": {
                "@type": "WebPage",
                "@id": url,
            },
        })
    }
}

/// Embeddable `<script type="application/ld+json">` block.
pub fn json_ld_script(data: &Value) -> String {
    // "</" would terminate the script element early
    let body = data.to_string().replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">{}</script>", body)
}
