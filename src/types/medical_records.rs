use serde::{Deserialize, Serialize};

use crate::entities::{medical_record, sea_orm_active_enums::MedicalRecordType};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MedicalRecordVisible {
    pub id: uuid::Uuid,
    pub pet_id: uuid::Uuid,
    pub veterinarian_id: uuid::Uuid,
    pub appointment_id: Option<uuid::Uuid>,
    pub record_type: MedicalRecordType,
    pub title: String,
    pub description: Option<String>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub prescription: Option<String>,
    pub symptoms: Option<String>,
    pub temperature_c: Option<f64>,
    pub weight_kg: Option<f64>,
    pub heart_rate: Option<String>,
    pub blood_pressure: Option<String>,
    pub cost: Option<f64>,
    pub record_date: chrono::DateTime<chrono::FixedOffset>,
    pub next_visit_date: Option<chrono::NaiveDate>,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<medical_record::Model> for MedicalRecordVisible {
    fn from(record: medical_record::Model) -> Self {
        Self {
            id: record.id,
            pet_id: record.pet_id,
            veterinarian_id: record.veterinarian_id,
            appointment_id: record.appointment_id,
            record_type: record.record_type,
            title: record.title,
            description: record.description,
            diagnosis: record.diagnosis,
            treatment: record.treatment,
            prescription: record.prescription,
            symptoms: record.symptoms,
            temperature_c: record.temperature_c,
            weight_kg: record.weight_kg,
            heart_rate: record.heart_rate,
            blood_pressure: record.blood_pressure,
            cost: record.cost,
            record_date: record.record_date,
            next_visit_date: record.next_visit_date,
            notes: record.notes,
            created_at: record.created_at,
        }
    }
}
