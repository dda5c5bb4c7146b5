use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(unique)]
    pub slug: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub featured_image: Option<String>,

    pub author_name: String,

    #[sea_orm(nullable)]
    pub category: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,

    #[sea_orm(nullable)]
    pub meta_title: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub meta_description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub meta_keywords: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub og_image: Option<String>,

    pub is_published: bool,
    pub is_featured: bool,

    // bumped by the blog_views insert trigger
    pub view_count: i64,
    pub read_time_minutes: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub published_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::blog_views::Entity")]
    BlogViews,
}

impl Related<super::blog_views::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogViews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
