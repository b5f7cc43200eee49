use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, Index, MigrationTrait, SchemaManager, Table,
    },
    schema::{
        boolean, integer_null, string, string_null, string_uniq, time_null,
        timestamp_with_time_zone, timestamp_with_time_zone_null, uuid,
    },
};

const INDEX_NAME: &str = "users_id_email_is_active_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(uuid(User::Id).primary_key())
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string_uniq(User::Email))
                    .col(string_uniq(User::Username))
                    .col(string(User::Password))
                    .col(string_null(User::PhoneNumber))
                    .col(string_null(User::Address))
                    // Stored as short strings so the same schema runs on
                    // Postgres and the SQLite test backend.
                    .col(string(User::Role).default("PetOwner"))
                    .col(boolean(User::IsActive).default(true))
                    .col(boolean(User::IsEmailVerified).default(false))
                    .col(timestamp_with_time_zone_null(User::LastLoginAt))
                    .col(string_null(User::LicenseNumber))
                    .col(string_null(User::Specialization))
                    .col(integer_null(User::YearsOfExperience))
                    .col(string_null(User::Biography))
                    .col(time_null(User::WorkStartTime))
                    .col(time_null(User::WorkEndTime))
                    .col(string_null(User::WorkDays))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(User::Table)
                    .col(User::Id)
                    .col(User::Email)
                    .col(User::IsActive)
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
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Username,
    Password,
    PhoneNumber,
    Address,
    Role,
    IsActive,
    IsEmailVerified,
    LastLoginAt,
    LicenseNumber,
    Specialization,
    YearsOfExperience,
    Biography,
    WorkStartTime,
    WorkEndTime,
    WorkDays,
    CreatedAt,
    UpdatedAt,
}
