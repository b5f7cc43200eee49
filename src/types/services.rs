use serde::{Deserialize, Serialize};

use crate::entities::service;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ServiceVisible {
    pub id: uuid::Uuid,
    pub category_id: uuid::Uuid,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub price: f64,
    pub discount_price: Option<f64>,
    pub duration_minutes: i32,
    pub requires_appointment: bool,
    pub is_active: bool,
    pub is_featured: bool,
    pub age_group: Option<String>,
    pub requires_fasting: bool,
    pub preparation_instructions: Option<String>,
    pub post_care_instructions: Option<String>,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<service::Model> for ServiceVisible {
    fn from(service: service::Model) -> Self {
        Self {
            id: service.id,
            category_id: service.category_id,
            name: service.name,
            code: service.code,
            description: service.description,
            short_description: service.short_description,
            price: service.price,
            discount_price: service.discount_price,
            duration_minutes: service.duration_minutes,
            requires_appointment: service.requires_appointment,
            is_active: service.is_active,
            is_featured: service.is_featured,
            age_group: service.age_group,
            requires_fasting: service.requires_fasting,
            preparation_instructions: service.preparation_instructions,
            post_care_instructions: service.post_care_instructions,
            created_at: service.created_at,
        }
    }
}
