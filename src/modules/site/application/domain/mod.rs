pub mod page;
pub mod profile;
pub mod seo;
pub mod share;
pub mod structured_data;

pub use page::{resolve, PageResolution, SitePage};
pub use profile::SiteProfile;
pub use seo::{ArticleMeta, MetaTag, PageMeta, PageMetaInput};
pub use share::ShareLinks;
pub use structured_data::{json_ld_script, ArticleStructuredData};
