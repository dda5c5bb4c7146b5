use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServicePackages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServicePackages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ServicePackages::ServiceType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServicePackages::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServicePackages::Description).text())
                    .col(
                        ColumnDef::new(ServicePackages::BasePrice)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServicePackages::Features)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(ServicePackages::DeliveryDays).integer())
                    .col(
                        ColumnDef::new(ServicePackages::IsPopular)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ServicePackages::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ServicePackages::CreatedAt)
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
                CREATE INDEX IF NOT EXISTS idx_service_packages_type_price
                ON service_packages (service_type, base_price)
                WHERE is_active = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServicePackages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServicePackages {
    Table,
    Id,
    ServiceType,
    Name,
    Description,
    BasePrice,
    Features,
    DeliveryDays,
    IsPopular,
    IsActive,
    CreatedAt,
}
