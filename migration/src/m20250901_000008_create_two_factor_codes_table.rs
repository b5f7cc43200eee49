use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{
        boolean, integer, string, string_null, timestamp_with_time_zone,
        timestamp_with_time_zone_null, uuid,
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
                    .table(TwoFactorCode::Table)
                    .if_not_exists()
                    .col(uuid(TwoFactorCode::Id).primary_key())
                    .col(uuid(TwoFactorCode::UserId))
                    .col(string(TwoFactorCode::Code))
                    .col(string_null(TwoFactorCode::ClientType))
                    .col(integer(TwoFactorCode::FailedAttempts).default(0))
                    .col(boolean(TwoFactorCode::IsUsed).default(false))
                    .col(timestamp_with_time_zone_null(TwoFactorCode::UsedAt))
                    .col(timestamp_with_time_zone(TwoFactorCode::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(TwoFactorCode::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-two_factor_codes-user_id")
                            .from(TwoFactorCode::Table, TwoFactorCode::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TwoFactorCode::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TwoFactorCode {
    Table,
    Id,
    UserId,
    Code,
    ClientType,
    FailedAttempts,
    IsUsed,
    UsedAt,
    ExpiresAt,
    CreatedAt,
}
