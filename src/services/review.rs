use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{entity::prelude::*, QueryOrder, Set};

use crate::{
    entities::{review, user},
    types::ReviewVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize, Clone)]
pub struct NewReview {
    pub veterinarian_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub pet_name: Option<String>,
    pub pet_species: Option<String>,
}

pub struct ReviewQuery;

impl ReviewQuery {
    pub async fn find_by_id(db: &DbConn, id: Uuid) -> Result<Option<review::Model>, DbErr> {
        review::Entity::find_by_id(id).one(db).await
    }

    pub async fn exists_for(
        db: &DbConn,
        veterinarian_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, DbErr> {
        let existing = review::Entity::find()
            .filter(review::Column::VeterinarianId.eq(veterinarian_id))
            .filter(review::Column::UserId.eq(user_id))
            .one(db)
            .await?;
        Ok(existing.is_some())
    }

    pub async fn list_all(db: &DbConn) -> Result<Vec<review::Model>, DbErr> {
        review::Entity::find()
            .order_by_desc(review::Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn list_pending(db: &DbConn) -> Result<Vec<review::Model>, DbErr> {
        review::Entity::find()
            .filter(review::Column::IsApproved.eq(false))
            .order_by_desc(review::Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn list_approved_by_veterinarian(
        db: &DbConn,
        veterinarian_id: Uuid,
    ) -> Result<Vec<review::Model>, DbErr> {
        review::Entity::find()
            .filter(review::Column::VeterinarianId.eq(veterinarian_id))
            .filter(review::Column::IsApproved.eq(true))
            .order_by_desc(review::Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn approved_ratings(
        db: &DbConn,
        veterinarian_id: Uuid,
    ) -> Result<Vec<i16>, DbErr> {
        Ok(Self::list_approved_by_veterinarian(db, veterinarian_id)
            .await?
            .into_iter()
            .map(|review| review.rating)
            .collect())
    }

    /// Reviewer names are withheld; only the veterinarian is named.
    pub async fn with_names(
        db: &DbConn,
        reviews: Vec<review::Model>,
    ) -> Result<Vec<ReviewVisible>, DbErr> {
        let veterinarian_ids: Vec<Uuid> = reviews.iter().map(|r| r.veterinarian_id).collect();
        let veterinarians: HashMap<Uuid, user::Model> = user::Entity::find()
            .filter(user::Column::Id.is_in(veterinarian_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(reviews
            .into_iter()
            .map(|review| ReviewVisible {
                id: review.id,
                veterinarian_id: review.veterinarian_id,
                rating: review.rating,
                title: review.title,
                comment: review.comment,
                pet_name: review.pet_name,
                pet_species: review.pet_species,
                is_verified_visit: review.is_verified_visit,
                is_approved: review.is_approved,
                veterinarian_name: veterinarians
                    .get(&review.veterinarian_id)
                    .map(|v| v.full_name())
                    .unwrap_or_default(),
                user_name: "Anonymous".to_string(),
                created_at: review.created_at,
            })
            .collect())
    }
}

pub struct ReviewMutation;

impl ReviewMutation {
    /// Verified and approved right away; the author proved a visit.
    pub async fn create(db: &DbConn, form_data: NewReview) -> Result<review::Model, DbErr> {
        review::ActiveModel {
            id: Set(Uuid::new_v4()),
            veterinarian_id: Set(form_data.veterinarian_id),
            user_id: Set(form_data.user_id),
            rating: Set(form_data.rating),
            title: Set(form_data.title),
            comment: Set(form_data.comment),
            pet_name: Set(form_data.pet_name),
            pet_species: Set(form_data.pet_species),
            is_verified_visit: Set(true),
            is_approved: Set(true),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await
    }

    pub async fn approve(db: &DbConn, review: review::Model) -> Result<review::Model, DbErr> {
        let mut review: review::ActiveModel = review.into();
        review.is_approved = Set(true);
        review.update(db).await
    }

    pub async fn delete(db: &DbConn, review: review::Model) -> Result<(), DbErr> {
        review.delete(db).await?;
        Ok(())
    }
}
