use chrono::Utc;
use sea_orm::{entity::prelude::*, QueryOrder, Set};

use crate::entities::{
    pet,
    sea_orm_active_enums::{PetGender, PetStatus},
    user,
};

#[derive(serde::Deserialize, Debug, serde::Serialize, Clone)]
pub struct NewPet {
    pub owner_id: Uuid,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub gender: PetGender,
    pub date_of_birth: Option<Date>,
    pub color: Option<String>,
    pub weight_kg: Option<f64>,
    pub microchip_number: Option<String>,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct PetChanges {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<PetGender>,
    pub date_of_birth: Option<Date>,
    pub color: Option<String>,
    pub weight_kg: Option<f64>,
    pub microchip_number: Option<String>,
    pub status: Option<PetStatus>,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
}

pub struct PetQuery;

impl PetQuery {
    pub async fn find_by_id(db: &DbConn, id: Uuid) -> Result<Option<pet::Model>, DbErr> {
        pet::Entity::find_by_id(id).one(db).await
    }

    pub async fn find_all_with_owner(
        db: &DbConn,
        only_active: bool,
    ) -> Result<Vec<(pet::Model, Option<user::Model>)>, DbErr> {
        let mut query = pet::Entity::find().find_also_related(user::Entity);
        if only_active {
            query = query.filter(pet::Column::Status.eq(PetStatus::Active));
        }
        query.order_by_asc(pet::Column::CreatedAt).all(db).await
    }

    pub async fn find_by_owner(db: &DbConn, owner_id: Uuid) -> Result<Vec<pet::Model>, DbErr> {
        pet::Entity::find()
            .filter(pet::Column::OwnerId.eq(owner_id))
            .filter(pet::Column::Status.ne(PetStatus::Inactive))
            .order_by_asc(pet::Column::CreatedAt)
            .all(db)
            .await
    }
}

pub struct PetMutation;

impl PetMutation {
    pub async fn create(db: &DbConn, form_data: NewPet) -> Result<pet::Model, DbErr> {
        let now = Utc::now();
        pet::ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(form_data.owner_id),
            name: Set(form_data.name),
            species: Set(form_data.species),
            breed: Set(form_data.breed),
            gender: Set(form_data.gender),
            date_of_birth: Set(form_data.date_of_birth),
            color: Set(form_data.color),
            weight_kg: Set(form_data.weight_kg),
            microchip_number: Set(form_data.microchip_number),
            status: Set(PetStatus::Active),
            notes: Set(form_data.notes),
            photo_url: Set(form_data.photo_url),
            created_by: Set(form_data.created_by),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(db)
        .await
    }

    pub async fn update(
        db: &DbConn,
        pet: pet::Model,
        changes: PetChanges,
    ) -> Result<pet::Model, DbErr> {
        let mut pet: pet::ActiveModel = pet.into();
        if let Some(name) = changes.name {
            pet.name = Set(name);
        }
        if let Some(species) = changes.species {
            pet.species = Set(species);
        }
        if let Some(breed) = changes.breed {
            pet.breed = Set(Some(breed));
        }
        if let Some(gender) = changes.gender {
            pet.gender = Set(gender);
        }
        if let Some(date_of_birth) = changes.date_of_birth {
            pet.date_of_birth = Set(Some(date_of_birth));
        }
        if let Some(color) = changes.color {
            pet.color = Set(Some(color));
        }
        if let Some(weight_kg) = changes.weight_kg {
            pet.weight_kg = Set(Some(weight_kg));
        }
        if let Some(microchip_number) = changes.microchip_number {
            pet.microchip_number = Set(Some(microchip_number));
        }
        if let Some(status) = changes.status {
            pet.status = Set(status);
        }
        if let Some(notes) = changes.notes {
            pet.notes = Set(Some(notes));
        }
        if let Some(photo_url) = changes.photo_url {
            pet.photo_url = Set(Some(photo_url));
        }
        pet.updated_at = Set(Utc::now().into());
        pet.update(db).await
    }

    /// Soft delete; history stays reachable for staff.
    pub async fn deactivate(db: &DbConn, pet: pet::Model) -> Result<pet::Model, DbErr> {
        let mut pet: pet::ActiveModel = pet.into();
        pet.status = Set(PetStatus::Inactive);
        pet.updated_at = Set(Utc::now().into());
        pet.update(db).await
    }
}
