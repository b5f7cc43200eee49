use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{
        boolean, date, double_null, string, string_null, string_uniq, time,
        timestamp_with_time_zone, timestamp_with_time_zone_null, uuid, uuid_null,
    },
};

use crate::{
    m20250901_000001_create_users_table::User, m20250901_000003_create_services_table::Service,
    m20250901_000004_create_pets_table::Pet,
};

const INDEX_NAME: &str = "appointments_veterinarian_id_date_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(uuid(Appointment::Id).primary_key())
                    .col(string_uniq(Appointment::AppointmentNumber))
                    .col(uuid(Appointment::PetId))
                    .col(uuid(Appointment::VeterinarianId))
                    .col(uuid_null(Appointment::ServiceId))
                    .col(date(Appointment::Date))
                    .col(time(Appointment::StartTime))
                    .col(time(Appointment::EndTime))
                    .col(string(Appointment::AppointmentType))
                    .col(string(Appointment::Status).default("Scheduled"))
                    .col(string_null(Appointment::Reason))
                    .col(string_null(Appointment::Notes))
                    .col(double_null(Appointment::EstimatedCost))
                    .col(double_null(Appointment::ActualCost))
                    .col(boolean(Appointment::IsPaid).default(false))
                    .col(timestamp_with_time_zone_null(Appointment::PaidAt))
                    .col(string_null(Appointment::PaymentMethod))
                    .col(string_null(Appointment::PaymentTransactionId))
                    .col(
                        timestamp_with_time_zone(Appointment::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Appointment::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-appointments-pet_id")
                            .from(Appointment::Table, Appointment::PetId)
                            .to(Pet::Table, Pet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-appointments-veterinarian_id")
                            .from(Appointment::Table, Appointment::VeterinarianId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-appointments-service_id")
                            .from(Appointment::Table, Appointment::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Appointment::Table)
                    .col(Appointment::VeterinarianId)
                    .col(Appointment::Date)
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
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    AppointmentNumber,
    PetId,
    VeterinarianId,
    ServiceId,
    Date,
    StartTime,
    EndTime,
    AppointmentType,
    Status,
    Reason,
    Notes,
    EstimatedCost,
    ActualCost,
    IsPaid,
    PaidAt,
    PaymentMethod,
    PaymentTransactionId,
    CreatedAt,
    UpdatedAt,
}
