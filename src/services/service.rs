use chrono::Utc;
use sea_orm::{entity::prelude::*, QueryOrder, Set};

use crate::entities::service;

#[derive(serde::Deserialize, Debug, serde::Serialize, Clone)]
pub struct NewService {
    pub category_id: Uuid,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub price: f64,
    pub discount_price: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub requires_appointment: Option<bool>,
    pub is_featured: Option<bool>,
    pub age_group: Option<String>,
    pub requires_fasting: Option<bool>,
    pub preparation_instructions: Option<String>,
    pub post_care_instructions: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceChanges {
    pub category_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub price: Option<f64>,
    pub discount_price: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub requires_appointment: Option<bool>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub age_group: Option<String>,
    pub requires_fasting: Option<bool>,
    pub preparation_instructions: Option<String>,
    pub post_care_instructions: Option<String>,
}

pub struct ServiceQuery;

impl ServiceQuery {
    pub async fn find_by_id(db: &DbConn, id: Uuid) -> Result<Option<service::Model>, DbErr> {
        service::Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_code(db: &DbConn, code: &str) -> Result<Option<service::Model>, DbErr> {
        service::Entity::find()
            .filter(service::Column::Code.eq(code))
            .one(db)
            .await
    }

    pub async fn list_active(
        db: &DbConn,
        category_id: Option<Uuid>,
        featured: Option<bool>,
    ) -> Result<Vec<service::Model>, DbErr> {
        let mut query = service::Entity::find().filter(service::Column::IsActive.eq(true));
        if let Some(category_id) = category_id {
            query = query.filter(service::Column::CategoryId.eq(category_id));
        }
        if let Some(featured) = featured {
            query = query.filter(service::Column::IsFeatured.eq(featured));
        }
        query.order_by_asc(service::Column::Name).all(db).await
    }
}

pub struct ServiceMutation;

impl ServiceMutation {
    pub async fn create(db: &DbConn, form_data: NewService) -> Result<service::Model, DbErr> {
        let now = Utc::now();
        service::ActiveModel {
            id: Set(Uuid::new_v4()),
            category_id: Set(form_data.category_id),
            name: Set(form_data.name),
            code: Set(form_data.code),
            description: Set(form_data.description),
            short_description: Set(form_data.short_description),
            price: Set(form_data.price),
            discount_price: Set(form_data.discount_price),
            duration_minutes: Set(form_data.duration_minutes.unwrap_or(30)),
            requires_appointment: Set(form_data.requires_appointment.unwrap_or(true)),
            is_active: Set(true),
            is_featured: Set(form_data.is_featured.unwrap_or(false)),
            age_group: Set(form_data.age_group),
            requires_fasting: Set(form_data.requires_fasting.unwrap_or(false)),
            preparation_instructions: Set(form_data.preparation_instructions),
            post_care_instructions: Set(form_data.post_care_instructions),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(db)
        .await
    }

    pub async fn update(
        db: &DbConn,
        service: service::Model,
        changes: ServiceChanges,
    ) -> Result<service::Model, DbErr> {
        let mut service: service::ActiveModel = service.into();
        if let Some(category_id) = changes.category_id {
            service.category_id = Set(category_id);
        }
        if let Some(name) = changes.name {
            service.name = Set(name);
        }
        if let Some(description) = changes.description {
            service.description = Set(Some(description));
        }
        if let Some(short_description) = changes.short_description {
            service.short_description = Set(Some(short_description));
        }
        if let Some(price) = changes.price {
            service.price = Set(price);
        }
        if let Some(discount_price) = changes.discount_price {
            service.discount_price = Set(Some(discount_price));
        }
        if let Some(duration_minutes) = changes.duration_minutes {
            service.duration_minutes = Set(duration_minutes);
        }
        if let Some(requires_appointment) = changes.requires_appointment {
            service.requires_appointment = Set(requires_appointment);
        }
        if let Some(is_active) = changes.is_active {
            service.is_active = Set(is_active);
        }
        if let Some(is_featured) = changes.is_featured {
            service.is_featured = Set(is_featured);
        }
        if let Some(age_group) = changes.age_group {
            service.age_group = Set(Some(age_group));
        }
        if let Some(requires_fasting) = changes.requires_fasting {
            service.requires_fasting = Set(requires_fasting);
        }
        if let Some(preparation_instructions) = changes.preparation_instructions {
            service.preparation_instructions = Set(Some(preparation_instructions));
        }
        if let Some(post_care_instructions) = changes.post_care_instructions {
            service.post_care_instructions = Set(Some(post_care_instructions));
        }
        service.updated_at = Set(Utc::now().into());
        service.update(db).await
    }

    pub async fn deactivate(
        db: &DbConn,
        service: service::Model,
    ) -> Result<service::Model, DbErr> {
        let mut service: service::ActiveModel = service.into();
        service.is_active = Set(false);
        service.updated_at = Set(Utc::now().into());
        service.update(db).await
    }
}
