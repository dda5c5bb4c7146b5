use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Shared updated_at trigger function
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        // =====================================================
        // Create website_inquiries table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(WebsiteInquiries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WebsiteInquiries::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(WebsiteInquiries::Name)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WebsiteInquiries::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(WebsiteInquiries::Phone).string_len(50))
                    .col(ColumnDef::new(WebsiteInquiries::Company).string_len(150))
                    .col(ColumnDef::new(WebsiteInquiries::ServiceInterest).string_len(20))
                    .col(ColumnDef::new(WebsiteInquiries::BudgetRange).string_len(50))
                    .col(ColumnDef::new(WebsiteInquiries::Message).text().not_null())
                    .col(
                        ColumnDef::new(WebsiteInquiries::Status)
                            .string_len(20)
                            .not_null()
                            .default("new"),
                    )
                    .col(ColumnDef::new(WebsiteInquiries::AdminNotes).text())
                    .col(
                        ColumnDef::new(WebsiteInquiries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WebsiteInquiries::UpdatedAt)
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
                ALTER TABLE website_inquiries
                ADD CONSTRAINT chk_website_inquiries_status
                CHECK (status IN ('new', 'contacted', 'in_progress', 'completed'));
                "#,
            )
            .await?;

        // Admin inbox reads newest-first by status
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_website_inquiries_status_created
                ON website_inquiries (status, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_website_inquiries_updated_at
                BEFORE UPDATE ON website_inquiries
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_website_inquiries_updated_at ON website_inquiries",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WebsiteInquiries::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum WebsiteInquiries {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Company,
    ServiceInterest,
    BudgetRange,
    Message,
    Status,
    AdminNotes,
    CreatedAt,
    UpdatedAt,
}
