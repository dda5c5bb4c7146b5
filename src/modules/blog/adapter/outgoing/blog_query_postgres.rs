use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::{Expr, Func}, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::modules::blog::adapter::outgoing::sea_orm_entity::blog_posts::{self, Column, Entity};
use crate::modules::blog::application::domain::BlogPost;
use crate::modules::blog::application::ports::outgoing::{
    BlogListFilter, BlogPage, BlogQuery, BlogQueryError, PageWindow,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct BlogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogQuery for BlogQueryPostgres {
    async fn list_published(
        &self,
        filter: BlogListFilter,
        window: PageWindow,
    ) -> Result<BlogPage, BlogQueryError> {
        let mut query = Entity::find().filter(Column::IsPublished.eq(true));

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category));
        }

        if filter.featured {
            query = query.filter(Column::IsFeatured.eq(true));
        }

        // Apply search filter with ILIKE
        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let search_pattern = format!("%{}%", escape_like(search));
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(&search_pattern))
                    .add(Expr::col(Column::Excerpt).ilike(&search_pattern)),
            );
        }

        query = query.order_by_desc(Column::PublishedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        if let Some(offset) = window.offset {
            query = query.offset(offset);
        }
        if let Some(limit) = window.effective_limit() {
            query = query.limit(limit);
        }

        let rows = query.all(&*self.db).await.map_err(map_db_err)?;
        let items = rows
            .into_iter()
            .map(model_to_post)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BlogPage { items, total })
    }

    async fn get_published_by_slug(&self, slug: &str) -> Result<BlogPost, BlogQueryError> {
        let normalized_slug = slug.trim().to_lowercase();

        // Matches the unique index on lower(slug)
        let model = Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Slug))).eq(normalized_slug))
            .filter(Column::IsPublished.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogQueryError::NotFound)?;

        model_to_post(model)
    }

    async fn categories(&self) -> Result<Vec<String>, BlogQueryError> {
        Entity::find()
            .select_only()
            .column(Column::Category)
            .distinct()
            .filter(Column::IsPublished.eq(true))
            .filter(Column::Category.is_not_null())
            .order_by_asc(Column::Category)
            .into_tuple::<String>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_post(model: blog_posts::Model) -> Result<BlogPost, BlogQueryError> {
    Ok(BlogPost {
        id: model.id,
        title: model.title,
        slug: model.slug,
        excerpt: model.excerpt,
        content: model.content,
        featured_image: model.featured_image,
        author_name: model.author_name,
        category: model.category,
        tags: from_json(&model.tags)?,
        meta_title: model.meta_title,
        meta_description: model.meta_description,
        meta_keywords: model.meta_keywords,
        og_image: model.og_image,
        is_published: model.is_published,
        is_featured: model.is_featured,
        view_count: model.view_count,
        read_time_minutes: model.read_time_minutes,
        published_at: model.published_at.map(Into::into),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

/// Escape LIKE metacharacters so user input only matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, BlogQueryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| BlogQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> BlogQueryError {
    BlogQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
