use chrono::Utc;
use sea_orm::{entity::prelude::*, QueryOrder, Set};

use crate::entities::{medical_record, sea_orm_active_enums::MedicalRecordType};

#[derive(serde::Deserialize, Debug, serde::Serialize, Clone)]
pub struct NewMedicalRecord {
    pub pet_id: Uuid,
    pub veterinarian_id: Uuid,
    pub appointment_id: Option<Uuid>,
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
    pub next_visit_date: Option<Date>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MedicalRecordChanges {
    pub record_type: Option<MedicalRecordType>,
    pub title: Option<String>,
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
    pub next_visit_date: Option<Date>,
    pub notes: Option<String>,
}

pub struct MedicalRecordQuery;

impl MedicalRecordQuery {
    pub async fn find_by_id(db: &DbConn, id: Uuid) -> Result<Option<medical_record::Model>, DbErr> {
        medical_record::Entity::find_by_id(id).one(db).await
    }

    pub async fn list_by_pet(
        db: &DbConn,
        pet_id: Uuid,
    ) -> Result<Vec<medical_record::Model>, DbErr> {
        medical_record::Entity::find()
            .filter(medical_record::Column::PetId.eq(pet_id))
            .order_by_desc(medical_record::Column::RecordDate)
            .all(db)
            .await
    }
}

pub struct MedicalRecordMutation;

impl MedicalRecordMutation {
    pub async fn create(
        db: &DbConn,
        form_data: NewMedicalRecord,
    ) -> Result<medical_record::Model, DbErr> {
        let now = Utc::now();
        medical_record::ActiveModel {
            id: Set(Uuid::new_v4()),
            pet_id: Set(form_data.pet_id),
            veterinarian_id: Set(form_data.veterinarian_id),
            appointment_id: Set(form_data.appointment_id),
            record_type: Set(form_data.record_type),
            title: Set(form_data.title),
            description: Set(form_data.description),
            diagnosis: Set(form_data.diagnosis),
            treatment: Set(form_data.treatment),
            prescription: Set(form_data.prescription),
            symptoms: Set(form_data.symptoms),
            temperature_c: Set(form_data.temperature_c),
            weight_kg: Set(form_data.weight_kg),
            heart_rate: Set(form_data.heart_rate),
            blood_pressure: Set(form_data.blood_pressure),
            cost: Set(form_data.cost),
            record_date: Set(now.into()),
            next_visit_date: Set(form_data.next_visit_date),
            notes: Set(form_data.notes),
            created_at: Set(now.into()),
        }
        .insert(db)
        .await
    }

    pub async fn update(
        db: &DbConn,
        record: medical_record::Model,
        changes: MedicalRecordChanges,
    ) -> Result<medical_record::Model, DbErr> {
        let mut record: medical_record::ActiveModel = record.into();
        if let Some(record_type) = changes.record_type {
            record.record_type = Set(record_type);
        }
        if let Some(title) = changes.title {
            record.title = Set(title);
        }
        if let Some(description) = changes.description {
            record.description = Set(Some(description));
        }
        if let Some(diagnosis) = changes.diagnosis {
            record.diagnosis = Set(Some(diagnosis));
        }
        if let Some(treatment) = changes.treatment {
            record.treatment = Set(Some(treatment));
        }
        if let Some(prescription) = changes.prescription {
            record.prescription = Set(Some(prescription));
        }
        if let Some(symptoms) = changes.symptoms {
            record.symptoms = Set(Some(symptoms));
        }
        if let Some(temperature_c) = changes.temperature_c {
            record.temperature_c = Set(Some(temperature_c));
        }
        if let Some(weight_kg) = changes.weight_kg {
            record.weight_kg = Set(Some(weight_kg));
        }
        if let Some(heart_rate) = changes.heart_rate {
            record.heart_rate = Set(Some(heart_rate));
        }
        if let Some(blood_pressure) = changes.blood_pressure {
            record.blood_pressure = Set(Some(blood_pressure));
        }
        if let Some(cost) = changes.cost {
            record.cost = Set(Some(cost));
        }
        if let Some(next_visit_date) = changes.next_visit_date {
            record.next_visit_date = Set(Some(next_visit_date));
        }
        if let Some(notes) = changes.notes {
            record.notes = Set(Some(notes));
        }
        record.update(db).await
    }

    pub async fn delete(db: &DbConn, record: medical_record::Model) -> Result<(), DbErr> {
        record.delete(db).await?;
        Ok(())
    }
}
