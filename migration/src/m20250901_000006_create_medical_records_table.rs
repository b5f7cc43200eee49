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

use crate::{
    m20250901_000001_create_users_table::User,
    m20250901_000004_create_pets_table::Pet,
    m20250901_000005_create_appointments_table::Appointment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedicalRecord::Table)
                    .if_not_exists()
                    .col(uuid(MedicalRecord::Id).primary_key())
                    .col(uuid(MedicalRecord::PetId))
                    .col(uuid(MedicalRecord::VeterinarianId))
                    .col(uuid_null(MedicalRecord::AppointmentId))
                    .col(string(MedicalRecord::RecordType))
                    .col(string(MedicalRecord::Title))
                    .col(string_null(MedicalRecord::Description))
                    .col(string_null(MedicalRecord::Diagnosis))
                    .col(string_null(MedicalRecord::Treatment))
                    .col(string_null(MedicalRecord::Prescription))
                    .col(string_null(MedicalRecord::Symptoms))
                    .col(double_null(MedicalRecord::TemperatureC))
                    .col(double_null(MedicalRecord::WeightKg))
                    .col(string_null(MedicalRecord::HeartRate))
                    .col(string_null(MedicalRecord::BloodPressure))
                    .col(double_null(MedicalRecord::Cost))
                    .col(timestamp_with_time_zone(MedicalRecord::RecordDate))
                    .col(date_null(MedicalRecord::NextVisitDate))
                    .col(string_null(MedicalRecord::Notes))
                    .col(
                        timestamp_with_time_zone(MedicalRecord::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-medical_records-pet_id")
                            .from(MedicalRecord::Table, MedicalRecord::PetId)
                            .to(Pet::Table, Pet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-medical_records-veterinarian_id")
                            .from(MedicalRecord::Table, MedicalRecord::VeterinarianId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-medical_records-appointment_id")
                            .from(MedicalRecord::Table, MedicalRecord::AppointmentId)
                            .to(Appointment::Table, Appointment::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MedicalRecord::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MedicalRecord {
    Table,
    Id,
    PetId,
    VeterinarianId,
    AppointmentId,
    RecordType,
    Title,
    Description,
    Diagnosis,
    Treatment,
    Prescription,
    Symptoms,
    TemperatureC,
    WeightKg,
    HeartRate,
    BloodPressure,
    Cost,
    RecordDate,
    NextVisitDate,
    Notes,
    CreatedAt,
}
