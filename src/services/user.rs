use chrono::Utc;
use sea_orm::{entity::prelude::*, QueryOrder, QuerySelect, Set};

use crate::entities::{sea_orm_active_enums::UserRole, user};

#[derive(serde::Deserialize, Debug, serde::Serialize, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub role: UserRole,
    pub is_email_verified: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UserProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub license_number: Option<String>,
    pub specialization: Option<String>,
    pub years_of_experience: Option<i32>,
    pub biography: Option<String>,
    pub work_start_time: Option<Time>,
    pub work_end_time: Option<Time>,
    pub work_days: Option<String>,
}

pub struct UserQuery;

impl UserQuery {
    pub async fn find_by_id(db: &DbConn, id: Uuid) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find_by_id(id).one(db).await
    }

    pub async fn find_active_by_id(db: &DbConn, id: Uuid) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find_by_id(id)
            .filter(user::Column::IsActive.eq(true))
            .one(db)
            .await
    }

    pub async fn find_active_by_email(
        db: &DbConn,
        email: &str,
    ) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::IsActive.eq(true))
            .one(db)
            .await
    }

    pub async fn find_by_email(db: &DbConn, email: &str) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await
    }

    pub async fn find_by_username(
        db: &DbConn,
        username: &str,
    ) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(db)
            .await
    }

    pub async fn find_all(db: &DbConn) -> Result<Vec<user::Model>, DbErr> {
        user::Entity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(db)
            .await
    }

    /// The referenced user must exist and hold the Veterinarian role.
    pub async fn find_veterinarian(db: &DbConn, id: Uuid) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find_by_id(id)
            .filter(user::Column::Role.eq(UserRole::Veterinarian))
            .one(db)
            .await
    }

    pub async fn admin_emails(db: &DbConn) -> Result<Vec<String>, DbErr> {
        user::Entity::find()
            .select_only()
            .column(user::Column::Email)
            .filter(user::Column::Role.eq(UserRole::Admin))
            .into_tuple()
            .all(db)
            .await
    }
}

pub struct UserMutation;

impl UserMutation {
    pub async fn create_user(db: &DbConn, form_data: NewUser) -> Result<user::Model, DbErr> {
        let now = Utc::now();
        user::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(form_data.first_name),
            last_name: Set(form_data.last_name),
            email: Set(form_data.email),
            username: Set(form_data.username),
            password: Set(form_data.password),
            phone_number: Set(form_data.phone_number),
            address: Set(form_data.address),
            role: Set(form_data.role),
            is_active: Set(true),
            is_email_verified: Set(form_data.is_email_verified),
            last_login_at: Set(None),
            license_number: Set(None),
            specialization: Set(None),
            years_of_experience: Set(None),
            biography: Set(None),
            work_start_time: Set(None),
            work_end_time: Set(None),
            work_days: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(db)
        .await
    }

    pub async fn update_profile(
        db: &DbConn,
        user: user::Model,
        changes: UserProfileChanges,
    ) -> Result<user::Model, DbErr> {
        let mut user: user::ActiveModel = user.into();
        if let Some(first_name) = changes.first_name {
            user.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            user.last_name = Set(last_name);
        }
        if let Some(phone_number) = changes.phone_number {
            user.phone_number = Set(Some(phone_number));
        }
        if let Some(address) = changes.address {
            user.address = Set(Some(address));
        }
        if let Some(license_number) = changes.license_number {
            user.license_number = Set(Some(license_number));
        }
        if let Some(specialization) = changes.specialization {
            user.specialization = Set(Some(specialization));
        }
        if let Some(years_of_experience) = changes.years_of_experience {
            user.years_of_experience = Set(Some(years_of_experience));
        }
        if let Some(biography) = changes.biography {
            user.biography = Set(Some(biography));
        }
        if let Some(work_start_time) = changes.work_start_time {
            user.work_start_time = Set(Some(work_start_time));
        }
        if let Some(work_end_time) = changes.work_end_time {
            user.work_end_time = Set(Some(work_end_time));
        }
        if let Some(work_days) = changes.work_days {
            user.work_days = Set(Some(work_days));
        }
        user.updated_at = Set(Utc::now().into());
        user.update(db).await
    }

    pub async fn update_password(
        db: &DbConn,
        user: user::Model,
        password: String,
    ) -> Result<user::Model, DbErr> {
        let mut user: user::ActiveModel = user.into();
        user.password = Set(password);
        user.updated_at = Set(Utc::now().into());
        user.update(db).await
    }

    pub async fn set_active(
        db: &DbConn,
        user: user::Model,
        is_active: bool,
    ) -> Result<user::Model, DbErr> {
        let mut user: user::ActiveModel = user.into();
        user.is_active = Set(is_active);
        user.updated_at = Set(Utc::now().into());
        user.update(db).await
    }

    pub async fn mark_email_verified(
        db: &DbConn,
        user: user::Model,
    ) -> Result<user::Model, DbErr> {
        let mut user: user::ActiveModel = user.into();
        user.is_email_verified = Set(true);
        user.updated_at = Set(Utc::now().into());
        user.update(db).await
    }

    pub async fn record_login(db: &DbConn, user: user::Model) -> Result<user::Model, DbErr> {
        let mut user: user::ActiveModel = user.into();
        user.last_login_at = Set(Some(Utc::now().into()));
        user.update(db).await
    }

    pub async fn delete(db: &DbConn, user: user::Model) -> Result<(), DbErr> {
        user.delete(db).await?;
        Ok(())
    }
}
