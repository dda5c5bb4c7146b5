use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::modules::blog::application::domain::BlogPost;

/// A published post in the "Web Development" category. Fresh id per call.
pub fn sample_blog_post(slug: &str) -> BlogPost {
    BlogPost {
        id: Uuid::new_v4(),
        title: "Building Fast Websites".to_string(),
        slug: slug.to_string(),
        excerpt: Some("Why speed matters".to_string()),
        content: "## Why speed matters\n\nSlow pages lose **visitors**. Measure with `lighthouse` first.\n\n- Compress images\n- Cache aggressively".to_string(),
        featured_image: Some("https://cdn.test/cover.png".to_string()),
        author_name: "Stachbit Team".to_string(),
        category: Some("Web Development".to_string()),
        tags: vec!["performance".to_string(), "web".to_string()],
        meta_title: None,
        meta_description: None,
        meta_keywords: None,
        og_image: None,
        is_published: true,
        is_featured: false,
        view_count: 10,
        read_time_minutes: 4,
        published_at: Some(Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap()),
        created_at: Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2025, 1, 20, 8, 30, 0).unwrap(),
    }
}
