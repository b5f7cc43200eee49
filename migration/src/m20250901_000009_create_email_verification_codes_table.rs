use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{
        boolean, integer, string, timestamp_with_time_zone, timestamp_with_time_zone_null, uuid,
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
                    .table(EmailVerificationCode::Table)
                    .if_not_exists()
                    .col(uuid(EmailVerificationCode::Id).primary_key())
                    .col(uuid(EmailVerificationCode::UserId))
                    .col(string(EmailVerificationCode::Code))
                    .col(integer(EmailVerificationCode::FailedAttempts).default(0))
                    .col(boolean(EmailVerificationCode::IsUsed).default(false))
                    .col(timestamp_with_time_zone_null(EmailVerificationCode::UsedAt))
                    .col(timestamp_with_time_zone(EmailVerificationCode::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(EmailVerificationCode::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-email_verification_codes-user_id")
                            .from(
                                EmailVerificationCode::Table,
                                EmailVerificationCode::UserId,
                            )
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
            .drop_table(
                Table::drop()
                    .table(EmailVerificationCode::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EmailVerificationCode {
    Table,
    Id,
    UserId,
    Code,
    FailedAttempts,
    IsUsed,
    UsedAt,
    ExpiresAt,
    CreatedAt,
}
