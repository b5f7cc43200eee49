use chrono::Utc;
use sea_orm::Set;

use crate::entities::service;

pub fn service(category_id: uuid::Uuid) -> service::ActiveModel {
    let now = Utc::now();
    service::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        category_id: Set(category_id),
        name: Set("Wellness Exam".to_string()),
        code: Set(format!("SVC-{}", uuid::Uuid::new_v4())),
        description: Set(None),
        short_description: Set(None),
        price: Set(80.0),
        discount_price: Set(None),
        duration_minutes: Set(30),
        requires_appointment: Set(true),
        is_active: Set(true),
        is_featured: Set(false),
        age_group: Set(None),
        requires_fasting: Set(false),
        preparation_instructions: Set(None),
        post_care_instructions: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait ServiceFactory {
    fn price(self, price: f64) -> service::ActiveModel;
    fn is_active(self, is_active: bool) -> service::ActiveModel;
    fn is_featured(self, is_featured: bool) -> service::ActiveModel;
    fn name(self, name: &str) -> service::ActiveModel;
}

impl ServiceFactory for service::ActiveModel {
    fn price(mut self, price: f64) -> service::ActiveModel {
        self.price = Set(price);
        self
    }

    fn is_active(mut self, is_active: bool) -> service::ActiveModel {
        self.is_active = Set(is_active);
        self
    }

    fn is_featured(mut self, is_featured: bool) -> service::ActiveModel {
        self.is_featured = Set(is_featured);
        self
    }

    fn name(mut self, name: &str) -> service::ActiveModel {
        self.name = Set(name.to_string());
        self
    }
}
