use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::profile::SiteProfile;

pub const TWITTER_CARD: &str = "summary_large_image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    Website,
    Article,
}

impl OgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ArticleMeta {
    pub author: Option<String>,
    pub published_time: Option<DateTime<Utc>>,
    pub modified_time: Option<DateTime<Utc>>,
}

/// What a page says about itself before site-wide defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct PageMetaInput {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    /// Site-relative path such as `/blog`
    pub path: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageMeta {
    pub title: String,
    pub document_title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub canonical_url: String,
    pub image: String,
    pub og_type: OgType,
    pub site_name: String,
    pub twitter_card: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticleMeta>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MetaAttribute {
    Name,
    Property,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MetaTag {
    pub attribute: MetaAttribute,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    fn name(key: &str, content: &str) -> Self {
        Self {
            attribute: MetaAttribute::Name,
            key: key.to_string(),
            content: content.to_string(),
        }
    }

    fn property(key: &str, content: &str) -> Self {
        Self {
            attribute: MetaAttribute::Property,
            key: key.to_string(),
            content: content.to_string(),
        }
    }
}

impl PageMeta {
    pub fn website(profile: &SiteProfile, input: PageMetaInput) -> Self {
        Self::build(profile, input, OgType::Website, None)
    }

    pub fn article(profile: &SiteProfile, input: PageMetaInput, article: ArticleMeta) -> Self {
        Self::build(profile, input, OgType::Article, Some(article))
    }

    fn build(
        profile: &SiteProfile,
        input: PageMetaInput,
        og_type: OgType,
        article: Option<ArticleMeta>,
    ) -> Self {
        let document_title = if input.title.is_empty() {
            profile.name.clone()
        } else {
            format!("{} | {}", input.title, profile.name)
        };

        let image = input
            .image
            .filter(|img| !img.is_empty())
            .unwrap_or_else(|| profile.default_image());

        Self {
            title: input.title,
            document_title,
            description: input.description,
            keywords: input.keywords.filter(|k| !k.is_empty()),
            canonical_url: profile.absolute_url(input.path.as_deref()),
            image,
            og_type,
            site_name: profile.name.clone(),
            twitter_card: TWITTER_CARD.to_string(),
            article,
        }
    }

    /// Meta tags in head order. Article tags are emitted only for present values.
    pub fn tags(&self) -> Vec<MetaTag> {
        let mut tags = vec![MetaTag::name("description", &self.description)];

        if let Some(keywords) = &self.keywords {
            tags.push(MetaTag::name("keywords", keywords));
        }

        tags.extend([
            MetaTag::property("og:title", &self.title),
            MetaTag::property("og:description", &self.description),
            MetaTag::property("og:image", &self.image),
            MetaTag::property("og:url", &self.canonical_url),
            MetaTag::property("og:type", self.og_type.as_str()),
            MetaTag::property("og:site_name", &self.site_name),
            MetaTag::name("twitter:card", &self.twitter_card),
            MetaTag::name("twitter:title", &self.title),
            MetaTag::name("twitter:description", &self.description),
            MetaTag::name("twitter:image", &self.image),
        ]);

        if let (OgType::Article, Some(article)) = (self.og_type, &self.article) {
            if let Some(author) = &article.author {
                tags.push(MetaTag::property("article:author", author));
            }
            if let Some(published) = article.published_time {
                tags.push(MetaTag::property(
                    "article:published_time",
                    &published.to_rfc3339(),
                ));
            }
            if let Some(modified) = article.modified_time {
                tags.push(MetaTag::property(
                    "article:modified_time",
                    &modified.to_rfc3339(),
                ));
            }
        }

        tags
    }

    /// `<title>`, meta tags and the canonical link as escaped HTML.
    pub fn to_head_html(&self) -> String {
        let mut html = format!("<title>{}</title>\n", escape_html(&self.document_title));

        for tag in self.tags() {
            let attribute = match tag.attribute {
                MetaAttribute::Name => "name",
                MetaAttribute::Property => "property",
            };
            html.push_str(&format!(
                "<meta {}=\"{}\" content=\"{}\">\n",
                attribute,
                escape_html(&tag.key),
                escape_html(&tag.content)
            ));
        }

        html.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">\n",
            escape_html(&self.canonical_url)
        ));

        html
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
