use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{boolean, small_integer, string_null, timestamp_with_time_zone, uuid},
};

use crate::m20250901_000001_create_users_table::User;

const INDEX_NAME: &str = "reviews_veterinarian_id_user_id_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(uuid(Review::Id).primary_key())
                    .col(uuid(Review::VeterinarianId))
                    .col(uuid(Review::UserId))
                    .col(small_integer(Review::Rating))
                    .col(string_null(Review::Title))
                    .col(string_null(Review::Comment))
                    .col(string_null(Review::PetName))
                    .col(string_null(Review::PetSpecies))
                    .col(boolean(Review::IsVerifiedVisit).default(false))
                    .col(boolean(Review::IsApproved).default(false))
                    .col(
                        timestamp_with_time_zone(Review::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reviews-veterinarian_id")
                            .from(Review::Table, Review::VeterinarianId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reviews-user_id")
                            .from(Review::Table, Review::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Review::Table)
                    .col(Review::VeterinarianId)
                    .col(Review::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    VeterinarianId,
    UserId,
    Rating,
    Title,
    Comment,
    PetName,
    PetSpecies,
    IsVerifiedVisit,
    IsApproved,
    CreatedAt,
}
