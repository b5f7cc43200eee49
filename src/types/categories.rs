use serde::{Deserialize, Serialize};

use crate::entities::category;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct CategoryVisible {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<uuid::Uuid>,
    pub category_type: Option<String>,
    pub target_species: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<category::Model> for CategoryVisible {
    fn from(category: category::Model) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            parent_id: category.parent_id,
            category_type: category.category_type,
            target_species: category.target_species,
            sort_order: category.sort_order,
            is_active: category.is_active,
            created_at: category.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CategoryWithSubcategories {
    #[serde(flatten)]
    pub category: CategoryVisible,
    pub subcategories: Vec<CategoryVisible>,
}
