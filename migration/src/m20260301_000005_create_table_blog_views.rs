use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogViews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogViews::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(BlogViews::BlogId).uuid().not_null())
                    .col(ColumnDef::new(BlogViews::Referrer).text())
                    .col(ColumnDef::new(BlogViews::UserAgent).text())
                    .col(
                        ColumnDef::new(BlogViews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_views_blog_id")
                            .from(BlogViews::Table, BlogViews::BlogId)
                            .to(BlogPosts::Table, BlogPosts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_blog_views_blog_id
                ON blog_views (blog_id);
                "#,
            )
            .await?;

        // Every recorded view bumps the denormalised counter on the post
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION increment_blog_view_count()
                RETURNS TRIGGER AS $$
                BEGIN
                    UPDATE blog_posts SET view_count = view_count + 1 WHERE id = NEW.blog_id;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER increment_blog_view_count_on_insert
                AFTER INSERT ON blog_views
                FOR EACH ROW
                EXECUTE FUNCTION increment_blog_view_count();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS increment_blog_view_count_on_insert ON blog_views",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS increment_blog_view_count")
            .await?;

        manager
            .drop_table(Table::drop().table(BlogViews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlogViews {
    Table,
    Id,
    BlogId,
    Referrer,
    UserAgent,
    CreatedAt,
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
}
