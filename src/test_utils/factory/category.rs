use chrono::Utc;
use sea_orm::Set;

use crate::entities::category;

pub fn category() -> category::ActiveModel {
    category::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        name: Set(format!("Category {}", uuid::Uuid::new_v4())),
        description: Set(None),
        parent_id: Set(None),
        category_type: Set(Some("Medical".to_string())),
        target_species: Set(Some("All".to_string())),
        sort_order: Set(0),
        is_active: Set(true),
        created_at: Set(Utc::now().into()),
    }
}

pub trait CategoryFactory {
    fn parent(self, parent_id: uuid::Uuid) -> category::ActiveModel;
    fn is_active(self, is_active: bool) -> category::ActiveModel;
}

impl CategoryFactory for category::ActiveModel {
    fn parent(mut self, parent_id: uuid::Uuid) -> category::ActiveModel {
        self.parent_id = Set(Some(parent_id));
        self
    }

    fn is_active(mut self, is_active: bool) -> category::ActiveModel {
        self.is_active = Set(is_active);
        self
    }
}
