use chrono::Utc;
use sea_orm::Set;

use crate::entities::review;

pub fn review(veterinarian_id: uuid::Uuid, user_id: uuid::Uuid) -> review::ActiveModel {
    review::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        veterinarian_id: Set(veterinarian_id),
        user_id: Set(user_id),
        rating: Set(5),
        title: Set(None),
        comment: Set(None),
        pet_name: Set(None),
        pet_species: Set(None),
        is_verified_visit: Set(true),
        is_approved: Set(true),
        created_at: Set(Utc::now().into()),
    }
}

pub trait ReviewFactory {
    fn rating(self, rating: i16) -> review::ActiveModel;
    fn approved(self, is_approved: bool) -> review::ActiveModel;
}

impl ReviewFactory for review::ActiveModel {
    fn rating(mut self, rating: i16) -> review::ActiveModel {
        self.rating = Set(rating);
        self
    }

    fn approved(mut self, is_approved: bool) -> review::ActiveModel {
        self.is_approved = Set(is_approved);
        self
    }
}
