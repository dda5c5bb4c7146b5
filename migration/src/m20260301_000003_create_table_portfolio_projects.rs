use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioProjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioProjects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioProjects::Description).text())
                    .col(ColumnDef::new(PortfolioProjects::ServiceType).string_len(20))
                    .col(ColumnDef::new(PortfolioProjects::ClientName).string_len(150))
                    .col(ColumnDef::new(PortfolioProjects::ImageUrl).text())
                    .col(ColumnDef::new(PortfolioProjects::ProjectUrl).text())
                    .col(
                        ColumnDef::new(PortfolioProjects::Technologies)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PortfolioProjects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_portfolio_projects_display_order
                ON portfolio_projects (display_order)
                WHERE is_active = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioProjects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioProjects {
    Table,
    Id,
    Title,
    Description,
    ServiceType,
    ClientName,
    ImageUrl,
    ProjectUrl,
    Technologies,
    IsFeatured,
    IsActive,
    DisplayOrder,
    CreatedAt,
}
