use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Contact settings (key/value)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SiteContactSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteContactSettings::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(SiteContactSettings::SettingKey)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SiteContactSettings::SettingValue).text())
                    .col(
                        ColumnDef::new(SiteContactSettings::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SiteContactSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Social links (platform/url)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SiteSocialLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteSocialLinks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(SiteSocialLinks::Platform)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SiteSocialLinks::Url).text())
                    .col(
                        ColumnDef::new(SiteSocialLinks::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(SiteSocialLinks::UpdatedAt)
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
                CREATE TRIGGER update_site_contact_settings_updated_at
                BEFORE UPDATE ON site_contact_settings
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();

                CREATE TRIGGER update_site_social_links_updated_at
                BEFORE UPDATE ON site_social_links
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
                r#"
                DROP TRIGGER IF EXISTS update_site_contact_settings_updated_at ON site_contact_settings;
                DROP TRIGGER IF EXISTS update_site_social_links_updated_at ON site_social_links;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SiteSocialLinks::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SiteContactSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SiteContactSettings {
    Table,
    Id,
    SettingKey,
    SettingValue,
    IsActive,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SiteSocialLinks {
    Table,
    Id,
    Platform,
    Url,
    IsActive,
    UpdatedAt,
}
