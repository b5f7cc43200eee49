use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{
        boolean, double, double_null, integer, string, string_null, string_uniq,
        timestamp_with_time_zone, uuid,
    },
};

use crate::m20250901_000002_create_categories_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(uuid(Service::Id).primary_key())
                    .col(uuid(Service::CategoryId))
                    .col(string(Service::Name))
                    .col(string_uniq(Service::Code))
                    .col(string_null(Service::Description))
                    .col(string_null(Service::ShortDescription))
                    .col(double(Service::Price))
                    .col(double_null(Service::DiscountPrice))
                    .col(integer(Service::DurationMinutes).default(30))
                    .col(boolean(Service::RequiresAppointment).default(true))
                    .col(boolean(Service::IsActive).default(true))
                    .col(boolean(Service::IsFeatured).default(false))
                    .col(string_null(Service::AgeGroup))
                    .col(boolean(Service::RequiresFasting).default(false))
                    .col(string_null(Service::PreparationInstructions))
                    .col(string_null(Service::PostCareInstructions))
                    .col(
                        timestamp_with_time_zone(Service::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Service::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-services-category_id")
                            .from(Service::Table, Service::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Service::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Service {
    Table,
    Id,
    CategoryId,
    Name,
    Code,
    Description,
    ShortDescription,
    Price,
    DiscountPrice,
    DurationMinutes,
    RequiresAppointment,
    IsActive,
    IsFeatured,
    AgeGroup,
    RequiresFasting,
    PreparationInstructions,
    PostCareInstructions,
    CreatedAt,
    UpdatedAt,
}
