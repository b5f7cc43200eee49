use serde::{Deserialize, Serialize};

use crate::entities::{
    pet,
    sea_orm_active_enums::{PetGender, PetStatus},
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PetVisible {
    pub id: uuid::Uuid,
    pub owner_id: uuid::Uuid,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub gender: PetGender,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub color: Option<String>,
    pub weight_kg: Option<f64>,
    pub microchip_number: Option<String>,
    pub status: PetStatus,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
    pub updated_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<pet::Model> for PetVisible {
    fn from(pet: pet::Model) -> Self {
        Self {
            id: pet.id,
            owner_id: pet.owner_id,
            name: pet.name,
            species: pet.species,
            breed: pet.breed,
            gender: pet.gender,
            date_of_birth: pet.date_of_birth,
            color: pet.color,
            weight_kg: pet.weight_kg,
            microchip_number: pet.microchip_number,
            status: pet.status,
            notes: pet.notes,
            photo_url: pet.photo_url,
            created_at: pet.created_at,
            updated_at: pet.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PetWithOwner {
    #[serde(flatten)]
    pub pet: PetVisible,
    pub owner_name: String,
}
