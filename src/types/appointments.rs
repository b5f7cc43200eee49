use serde::{Deserialize, Serialize};

use crate::entities::sea_orm_active_enums::{AppointmentStatus, AppointmentType};

/// Flattened appointment row with the display names the clients render.
/// Times are serialized as `HH:MM` strings.
#[derive(Serialize, Deserialize, Debug)]
pub struct AppointmentVisible {
    pub id: uuid::Uuid,
    pub appointment_number: String,
    pub pet_id: uuid::Uuid,
    pub veterinarian_id: uuid::Uuid,
    pub service_id: Option<uuid::Uuid>,
    pub date: chrono::NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub pet_name: String,
    pub owner_name: String,
    pub veterinarian_name: String,
    pub service_name: Option<String>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub is_paid: bool,
    pub paid_at: Option<chrono::DateTime<chrono::FixedOffset>>,
    pub payment_method: Option<String>,
    pub payment_transaction_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AvailableSlots {
    pub veterinarian_id: uuid::Uuid,
    pub date: chrono::NaiveDate,
    pub slots: Vec<String>,
}
