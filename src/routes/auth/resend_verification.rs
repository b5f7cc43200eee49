use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};

use crate::{
    routes::utils::{response_400, response_404, response_500},
    services::{user::UserQuery, verification_code::EmailVerificationCodes},
    startup::AppState,
    types::SuccessResponse,
    utils::emails,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
pub struct RequestBody {
    pub email: String,
}

#[tracing::instrument(name = "Resending an email verification code", skip(data, req), fields(user_email = &req.email))]
#[post("/resend-verification")]
pub async fn resend_verification(data: Data<AppState>, req: Json<RequestBody>) -> HttpResponse {
    let settings = crate::settings::get_settings().expect("Failed to read settings.");

    let user = match UserQuery::find_active_by_email(&data.conn, &req.email).await {
        Ok(Some(user)) => user,
        Ok(None) => return response_404("User not found."),
        Err(e) => return response_500(e),
    };
    if user.is_email_verified {
        return response_400("Email is already verified.");
    }

    match EmailVerificationCodes::cooldown_remaining(
        &data.conn,
        user.id,
        settings.verification.email_resend_cooldown_minutes,
    )
    .await
    {
        Ok(Some(seconds)) => {
            return response_400(&format!(
                "Please wait {} seconds before requesting a new code.",
                seconds.max(0)
            ))
        }
        Ok(None) => (),
        Err(e) => return response_500(e),
    }

    let code = match EmailVerificationCodes::issue(
        &data.conn,
        user.id,
        settings.verification.email_code_expiration_minutes,
    )
    .await
    {
        Ok(code) => code,
        Err(e) => return response_500(e),
    };

    if let Err(e) = emails::send_code_email(
        "4Paw Veterinary Clinic - Verify your email".to_string(),
        user.email.clone(),
        user.first_name.clone(),
        user.last_name.clone(),
        "verification_code_email.html",
        code.code.clone(),
        settings.verification.email_code_expiration_minutes,
    )
    .await
    {
        tracing::event!(target: "backend", tracing::Level::ERROR, "Verification email failed: {}", e);
        return response_500(e);
    }

    HttpResponse::Ok().json(SuccessResponse {
        message: "A new verification code was sent to your email.".to_string(),
    })
}
