use chrono::Utc;
use sea_orm::Set;

use crate::entities::{
    pet,
    sea_orm_active_enums::{PetGender, PetStatus},
};

pub fn pet(owner_id: uuid::Uuid) -> pet::ActiveModel {
    let now = Utc::now();
    pet::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        owner_id: Set(owner_id),
        name: Set("Rex".to_string()),
        species: Set("Dog".to_string()),
        breed: Set(None),
        gender: Set(PetGender::Male),
        date_of_birth: Set(None),
        color: Set(None),
        weight_kg: Set(None),
        microchip_number: Set(None),
        status: Set(PetStatus::Active),
        notes: Set(None),
        photo_url: Set(None),
        created_by: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait PetFactory {
    fn status(self, status: PetStatus) -> pet::ActiveModel;
    fn name(self, name: &str) -> pet::ActiveModel;
}

impl PetFactory for pet::ActiveModel {
    fn status(mut self, status: PetStatus) -> pet::ActiveModel {
        self.status = Set(status);
        self
    }

    fn name(mut self, name: &str) -> pet::ActiveModel {
        self.name = Set(name.to_string());
        self
    }
}
