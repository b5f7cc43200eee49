use serde::{Deserialize, Serialize};

use crate::entities::{sea_orm_active_enums::UserRole, user};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct UserVisible {
    pub id: uuid::Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub is_email_verified: bool,
    pub license_number: Option<String>,
    pub specialization: Option<String>,
    pub years_of_experience: Option<i32>,
    pub biography: Option<String>,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<user::Model> for UserVisible {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            username: user.username,
            phone_number: user.phone_number,
            address: user.address,
            role: user.role,
            is_active: user.is_active,
            is_email_verified: user.is_email_verified,
            license_number: user.license_number,
            specialization: user.specialization,
            years_of_experience: user.years_of_experience,
            biography: user.biography,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub user_id: uuid::Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub access_token: String,
    pub token_expiration: chrono::DateTime<chrono::Utc>,
    pub is_active: bool,
    pub is_email_verified: bool,
    pub permissions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TwoFactorChallenge {
    pub requires_two_factor: bool,
    pub message: String,
    pub user_id: uuid::Uuid,
    pub email: String,
    pub code_expires_at: chrono::DateTime<chrono::Utc>,
    pub remaining_attempts: i32,
}
