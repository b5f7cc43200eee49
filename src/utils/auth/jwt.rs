use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::permissions::role_permissions;
use crate::entities::{sea_orm_active_enums::UserRole, user};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub permissions: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}

#[tracing::instrument(name = "Issuing an access token", skip(user), fields(user_id = %user.id))]
pub fn issue_access_token(
    user: &user::Model,
) -> Result<(String, DateTime<Utc>), jsonwebtoken::errors::Error> {
    let settings = crate::settings::get_settings().expect("Failed to read settings.");
    let now = Utc::now();
    let expiration = now + Duration::hours(settings.secret.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        username: user.username.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        role: user.role.clone(),
        permissions: role_permissions(&user.role)
            .iter()
            .map(|permission| permission.to_string())
            .collect(),
        iat: now.timestamp(),
        exp: expiration.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.secret.jwt_secret.as_bytes()),
    )?;
    Ok((token, expiration))
}

pub fn decode_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let settings = crate::settings::get_settings().expect("Failed to read settings.");
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.secret.jwt_secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(decoded.claims)
}
