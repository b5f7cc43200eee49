use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum UserRole {
    #[sea_orm(string_value = "PetOwner")]
    PetOwner,
    #[sea_orm(string_value = "Veterinarian")]
    Veterinarian,
    #[sea_orm(string_value = "VetTechnician")]
    VetTechnician,
    #[sea_orm(string_value = "Receptionist")]
    Receptionist,
    #[sea_orm(string_value = "Admin")]
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PetGender {
    #[sea_orm(string_value = "Male")]
    Male,
    #[sea_orm(string_value = "Female")]
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PetStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
    #[sea_orm(string_value = "Deceased")]
    Deceased,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AppointmentType {
    #[sea_orm(string_value = "Checkup")]
    Checkup,
    #[sea_orm(string_value = "Vaccination")]
    Vaccination,
    #[sea_orm(string_value = "Surgery")]
    Surgery,
    #[sea_orm(string_value = "Emergency")]
    Emergency,
    #[sea_orm(string_value = "Grooming")]
    Grooming,
    #[sea_orm(string_value = "Dental")]
    Dental,
    #[sea_orm(string_value = "Consultation")]
    Consultation,
    #[sea_orm(string_value = "FollowUp")]
    FollowUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AppointmentStatus {
    #[sea_orm(string_value = "Scheduled")]
    Scheduled,
    #[sea_orm(string_value = "Confirmed")]
    Confirmed,
    #[sea_orm(string_value = "InProgress")]
    InProgress,
    #[sea_orm(string_value = "Completed")]
    Completed,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
    #[sea_orm(string_value = "NoShow")]
    NoShow,
    #[sea_orm(string_value = "Rescheduled")]
    Rescheduled,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum MedicalRecordType {
    #[sea_orm(string_value = "Examination")]
    Examination,
    #[sea_orm(string_value = "Vaccination")]
    Vaccination,
    #[sea_orm(string_value = "Surgery")]
    Surgery,
    #[sea_orm(string_value = "Treatment")]
    Treatment,
    #[sea_orm(string_value = "Prescription")]
    Prescription,
    #[sea_orm(string_value = "LabResult")]
    LabResult,
    #[sea_orm(string_value = "Diagnosis")]
    Diagnosis,
    #[sea_orm(string_value = "Note")]
    Note,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum NotificationKind {
    #[sea_orm(string_value = "UserRegistration")]
    UserRegistration,
    #[sea_orm(string_value = "Appointment")]
    Appointment,
    #[sea_orm(string_value = "System")]
    System,
}
