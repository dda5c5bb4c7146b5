use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::read_time::effective_read_time;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    pub author_name: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub og_image: Option<String>,
    pub is_published: bool,
    pub is_featured: bool,
    pub view_count: i64,
    pub read_time_minutes: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing card: everything but the body and SEO overrides.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BlogPostSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub author_name: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub is_featured: bool,
    pub view_count: i64,
    pub read_time_minutes: i32,
    pub published_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// Publication time, falling back to creation for rows without one.
    pub fn published_or_created(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }

    /// Fills in a missing read-time estimate from the body.
    pub fn with_read_time(mut self) -> Self {
        self.read_time_minutes = effective_read_time(self.read_time_minutes, &self.content);
        self
    }

    pub fn summary(&self) -> BlogPostSummary {
        BlogPostSummary {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            featured_image: self.featured_image.clone(),
            author_name: self.author_name.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            is_featured: self.is_featured,
            view_count: self.view_count,
            read_time_minutes: effective_read_time(self.read_time_minutes, &self.content),
            published_at: self.published_at,
        }
    }
}
