use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{
        date_null, double_null, string, string_null, timestamp_with_time_zone, uuid, uuid_null,
    },
};

use crate::m20250901_000001_create_users_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(uuid(Pet::Id).primary_key())
                    .col(uuid(Pet::OwnerId))
                    .col(string(Pet::Name))
                    .col(string(Pet::Species))
                    .col(string_null(Pet::Breed))
                    .col(string(Pet::Gender))
                    .col(date_null(Pet::DateOfBirth))
                    .col(string_null(Pet::Color))
                    .col(double_null(Pet::WeightKg))
                    .col(string_null(Pet::MicrochipNumber))
                    .col(string(Pet::Status).default("Active"))
                    .col(string_null(Pet::Notes))
                    .col(string_null(Pet::PhotoUrl))
                    .col(uuid_null(Pet::CreatedBy))
                    .col(
                        timestamp_with_time_zone(Pet::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Pet::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-pets-owner_id")
                            .from(Pet::Table, Pet::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-pets-created_by")
                            .from(Pet::Table, Pet::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pet::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Pet {
    Table,
    Id,
    OwnerId,
    Name,
    Species,
    Breed,
    Gender,
    DateOfBirth,
    Color,
    WeightKg,
    MicrochipNumber,
    Status,
    Notes,
    PhotoUrl,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
