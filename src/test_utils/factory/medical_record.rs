use chrono::Utc;
use sea_orm::Set;

use crate::entities::{medical_record, sea_orm_active_enums::MedicalRecordType};

pub fn medical_record(
    pet_id: uuid::Uuid,
    veterinarian_id: uuid::Uuid,
) -> medical_record::ActiveModel {
    let now = Utc::now();
    medical_record::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        pet_id: Set(pet_id),
        veterinarian_id: Set(veterinarian_id),
        appointment_id: Set(None),
        record_type: Set(MedicalRecordType::Examination),
        title: Set("Routine examination".to_string()),
        description: Set(None),
        diagnosis: Set(None),
        treatment: Set(None),
        prescription: Set(None),
        symptoms: Set(None),
        temperature_c: Set(None),
        weight_kg: Set(None),
        heart_rate: Set(None),
        blood_pressure: Set(None),
        cost: Set(None),
        record_date: Set(now.into()),
        next_visit_date: Set(None),
        notes: Set(None),
        created_at: Set(now.into()),
    }
}
