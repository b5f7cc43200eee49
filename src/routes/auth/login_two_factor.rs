use actix_web::{
    post,
    rt::task,
    web::{Data, Json},
    HttpResponse,
};

use crate::{
    routes::utils::response_500,
    services::{user::UserQuery, verification_code::TwoFactorCodes},
    startup::AppState,
    types::{ErrorResponse, TwoFactorChallenge},
    utils::{auth::password::verify_password, emails},
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
pub struct RequestBody {
    pub email: String,
    pub password: String,
    pub client_type: Option<String>,
}

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse {
        error: "Invalid email or password.".to_string(),
    })
}

#[tracing::instrument(name = "Initiating a two-factor login", skip(data, req_user), fields(user_email = &req_user.email))]
#[post("/login-2fa")]
pub async fn login_two_factor(data: Data<AppState>, req_user: Json<RequestBody>) -> HttpResponse {
    let settings = crate::settings::get_settings().expect("Failed to read settings.");

    let user = match UserQuery::find_active_by_email(&data.conn, &req_user.email).await {
        Ok(Some(user)) => user,
        Ok(None) => return invalid_credentials(),
        Err(e) => return response_500(e),
    };

    let stored_hash = user.password.clone();
    let supplied_password = req_user.password.clone();
    let password_matches = task::spawn_blocking(move || {
        verify_password(&stored_hash, supplied_password.as_bytes())
    })
    .await
    .expect("Unable to unwrap JoinError.");
    if password_matches.is_err() {
        return invalid_credentials();
    }

    let code = match TwoFactorCodes::issue(
        &data.conn,
        user.id,
        req_user.client_type.clone(),
        settings.verification.two_factor_expiration_minutes,
    )
    .await
    {
        Ok(code) => code,
        Err(e) => return response_500(e),
    };

    // Unlike registration, a missing code email means login cannot proceed.
    if let Err(e) = emails::send_code_email(
        "4Paw Veterinary Clinic - Your sign-in code".to_string(),
        user.email.clone(),
        user.first_name.clone(),
        user.last_name.clone(),
        "two_factor_code_email.html",
        code.code.clone(),
        settings.verification.two_factor_expiration_minutes,
    )
    .await
    {
        tracing::event!(target: "backend", tracing::Level::ERROR, "Two-factor email failed: {}", e);
        return response_500(e);
    }

    HttpResponse::Ok().json(TwoFactorChallenge {
        requires_two_factor: true,
        message: "Verification code sent to your email. Please check your inbox.".to_string(),
        user_id: user.id,
        email: user.email,
        code_expires_at: code.expires_at.into(),
        remaining_attempts: settings.verification.max_failed_attempts,
    })
}
