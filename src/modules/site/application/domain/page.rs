use serde::Serialize;
use utoipa::ToSchema;

use super::profile::SiteProfile;
use super::seo::{PageMeta, PageMetaInput};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum SitePage {
    Landing,
    Services,
    Calculator,
    Contact,
    About,
    Portfolio,
    Blog,
    BlogPost { slug: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResolution {
    Page(SitePage),
    Redirect(String),
}

/// Map a request path onto a page. Anything unrecognised goes home.
pub fn resolve(path: &str) -> PageResolution {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim().trim_end_matches('/');

    let page = match trimmed {
        "" => Some(SitePage::Landing),
        "/services" => Some(SitePage::Services),
        "/calculator" => Some(SitePage::Calculator),
        "/contact" => Some(SitePage::Contact),
        "/about" => Some(SitePage::About),
        "/portfolio" => Some(SitePage::Portfolio),
        "/blog" => Some(SitePage::Blog),
        other => other
            .strip_prefix("/blog/")
            .filter(|slug| !slug.is_empty() && !slug.contains('/'))
            .map(|slug| SitePage::BlogPost {
                slug: slug.to_string(),
            }),
    };

    match page {
        Some(page) => PageResolution::Page(page),
        None => PageResolution::Redirect("/".to_string()),
    }
}

impl SitePage {
    pub fn path(&self) -> String {
        match self {
            SitePage::Landing => "/".to_string(),
            SitePage::Services => "/services".to_string(),
            SitePage::Calculator => "/calculator".to_string(),
            SitePage::Contact => "/contact".to_string(),
            SitePage::About => "/about".to_string(),
            SitePage::Portfolio => "/portfolio".to_string(),
            SitePage::Blog => "/blog".to_string(),
            SitePage::BlogPost { slug } => format!("/blog/{slug}"),
        }
    }

    /// Metadata for pages whose head does not depend on stored content.
    /// Articles are described by the blog module once the post is loaded.
    pub fn static_meta(&self, profile: &SiteProfile) -> Option<PageMeta> {
        let (title, description, keywords) = match self {
            SitePage::Landing => (
                "",
                "We create stunning websites, powerful SaaS applications, and mobile apps that help businesses thrive in the digital age.",
                None,
            ),
            SitePage::Services => (
                "Services",
                "From concept to deployment, we deliver end-to-end digital solutions that transform your business vision into reality.",
                None,
            ),
            SitePage::Calculator => (
                "Cost Calculator",
                "Get an instant estimate for your project. Customize your requirements and see the price in real-time.",
                None,
            ),
            SitePage::Contact => (
                "Contact",
                "Have a project in mind? Let's discuss how we can help bring your vision to life.",
                None,
            ),
            SitePage::About => (
                "About",
                "We're a passionate team of developers and designers dedicated to building digital solutions that make a difference.",
                None,
            ),
            SitePage::Portfolio => (
                "Portfolio",
                "Explore our recent projects and see how we've helped businesses achieve their digital goals.",
                None,
            ),
            SitePage::Blog => (
                "Blog",
                "Explore our latest insights on web development, SaaS, mobile apps, and digital solutions. Stay updated with industry trends and expert tips.",
                Some("web development blog, SaaS insights, mobile app development, technology blog, digital solutions"),
            ),
            SitePage::BlogPost { .. } => return None,
        };

        let path = match self {
            SitePage::Landing => None,
            other => Some(other.path()),
        };

        Some(PageMeta::website(
            profile,
            PageMetaInput {
                title: title.to_string(),
                description: description.to_string(),
                keywords: keywords.map(str::to_string),
                path,
                image: None,
            },
        ))
    }
}
