use serde::Serialize;
use url::Url;
use utoipa::ToSchema;

/// Social share targets for a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShareLinks {
    pub url: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
}

impl ShareLinks {
    pub fn for_page(canonical_url: &str, title: &str) -> Self {
        Self {
            url: canonical_url.to_string(),
            twitter: with_params(
                "https://twitter.com/intent/tweet",
                &[("text", title), ("url", canonical_url)],
            ),
            facebook: with_params(
                "https://www.facebook.com/sharer/sharer.php",
                &[("u", canonical_url)],
            ),
            linkedin: with_params(
                "https://www.linkedin.com/sharing/share-offsite/",
                &[("url", canonical_url)],
            ),
        }
    }
}

fn with_params(base: &str, params: &[(&str, &str)]) -> String {
    match Url::parse_with_params(base, params) {
        Ok(url) => url.to_string(),
        // bases are constants, parsing cannot fail
        Err(_) => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_title_and_url() {
        let links = ShareLinks::for_page("https://stachbit.in/blog/a-b", "Rust & SaaS");

        assert_eq!(links.url, "https://stachbit.in/blog/a-b");
        assert_eq!(
            links.twitter,
            "https://twitter.com/intent/tweet?text=Rust+%26+SaaS&url=https%3A%2F%2Fstachbit.in%2Fblog%2Fa-b"
        );
        assert_eq!(
            links.facebook,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fstachbit.in%2Fblog%2Fa-b"
        );
        assert_eq!(
            links.linkedin,
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fstachbit.in%2Fblog%2Fa-b"
        );
    }
}
