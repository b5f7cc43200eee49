use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};

use crate::{
    routes::utils::{response_400, response_500},
    services::{
        user::{UserMutation, UserQuery},
        verification_code::{CodeCheck, TwoFactorCodes},
    },
    startup::AppState,
    types::AuthResponse,
    utils::auth::{jwt, permissions::role_permissions},
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
pub struct RequestBody {
    pub email: String,
    pub code: String,
}

#[tracing::instrument(name = "Verifying a two-factor code", skip(data, req), fields(user_email = &req.email))]
#[post("/verify-2fa")]
pub async fn verify_two_factor(data: Data<AppState>, req: Json<RequestBody>) -> HttpResponse {
    let user = match UserQuery::find_active_by_email(&data.conn, &req.email).await {
        Ok(Some(user)) => user,
        Ok(None) => return response_400("Invalid verification attempt."),
        Err(e) => return response_500(e),
    };

    match TwoFactorCodes::verify(&data.conn, user.id, &req.code).await {
        Ok(CodeCheck::Valid) => (),
        Ok(CodeCheck::InvalidOrExpired) => {
            return response_400("Invalid or expired verification code.")
        }
        Err(e) => return response_500(e),
    }

    let (access_token, token_expiration) = match jwt::issue_access_token(&user) {
        Ok(issued) => issued,
        Err(e) => return response_500(e),
    };
    let user = match UserMutation::record_login(&data.conn, user).await {
        Ok(user) => user,
        Err(e) => return response_500(e),
    };

    HttpResponse::Ok().json(AuthResponse {
        user_id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
        username: user.username,
        role: user.role.clone(),
        access_token,
        token_expiration,
        is_active: user.is_active,
        is_email_verified: user.is_email_verified,
        permissions: role_permissions(&user.role)
            .iter()
            .map(|permission| permission.to_string())
            .collect(),
    })
}
