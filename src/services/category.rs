use chrono::Utc;
use sea_orm::{entity::prelude::*, QueryOrder, Set};

use crate::entities::category;

#[derive(serde::Deserialize, Debug, serde::Serialize, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
    pub category_type: Option<String>,
    pub target_species: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_type: Option<String>,
    pub target_species: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

pub struct CategoryQuery;

impl CategoryQuery {
    pub async fn find_by_id(db: &DbConn, id: Uuid) -> Result<Option<category::Model>, DbErr> {
        category::Entity::find_by_id(id).one(db).await
    }

    pub async fn list_active(db: &DbConn) -> Result<Vec<category::Model>, DbErr> {
        category::Entity::find()
            .filter(category::Column::IsActive.eq(true))
            .order_by_asc(category::Column::SortOrder)
            .order_by_asc(category::Column::Name)
            .all(db)
            .await
    }

    pub async fn list_top_level(db: &DbConn) -> Result<Vec<category::Model>, DbErr> {
        category::Entity::find()
            .filter(category::Column::IsActive.eq(true))
            .filter(category::Column::ParentId.is_null())
            .order_by_asc(category::Column::SortOrder)
            .all(db)
            .await
    }

    pub async fn list_children(db: &DbConn, id: Uuid) -> Result<Vec<category::Model>, DbErr> {
        category::Entity::find()
            .filter(category::Column::ParentId.eq(id))
            .order_by_asc(category::Column::SortOrder)
            .all(db)
            .await
    }
}

pub struct CategoryMutation;

impl CategoryMutation {
    pub async fn create(db: &DbConn, form_data: NewCategory) -> Result<category::Model, DbErr> {
        category::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(form_data.name),
            description: Set(form_data.description),
            parent_id: Set(form_data.parent_id),
            category_type: Set(form_data.category_type),
            target_species: Set(form_data.target_species),
            sort_order: Set(form_data.sort_order.unwrap_or(0)),
            is_active: Set(true),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await
    }

    pub async fn update(
        db: &DbConn,
        category: category::Model,
        changes: CategoryChanges,
    ) -> Result<category::Model, DbErr> {
        let mut category: category::ActiveModel = category.into();
        if let Some(name) = changes.name {
            category.name = Set(name);
        }
        if let Some(description) = changes.description {
            category.description = Set(Some(description));
        }
        if let Some(category_type) = changes.category_type {
            category.category_type = Set(Some(category_type));
        }
        if let Some(target_species) = changes.target_species {
            category.target_species = Set(Some(target_species));
        }
        if let Some(sort_order) = changes.sort_order {
            category.sort_order = Set(sort_order);
        }
        if let Some(is_active) = changes.is_active {
            category.is_active = Set(is_active);
        }
        category.update(db).await
    }

    pub async fn deactivate(
        db: &DbConn,
        category: category::Model,
    ) -> Result<category::Model, DbErr> {
        let mut category: category::ActiveModel = category.into();
        category.is_active = Set(false);
        category.update(db).await
    }
}
