use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};

use crate::{
    routes::utils::{response_400, response_404, response_500},
    services::{
        user::{UserMutation, UserQuery},
        verification_code::{CodeCheck, EmailVerificationCodes},
    },
    startup::AppState,
    types::SuccessResponse,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
pub struct RequestBody {
    pub email: String,
    pub code: String,
}

#[tracing::instrument(name = "Verifying an email address", skip(data, req), fields(user_email = &req.email))]
#[post("/verify-email")]
pub async fn verify_email(data: Data<AppState>, req: Json<RequestBody>) -> HttpResponse {
    let user = match UserQuery::find_active_by_email(&data.conn, &req.email).await {
        Ok(Some(user)) => user,
        Ok(None) => return response_404("User not found."),
        Err(e) => return response_500(e),
    };
    if user.is_email_verified {
        return response_400("Email is already verified.");
    }

    match EmailVerificationCodes::verify(&data.conn, user.id, &req.code).await {
        Ok(CodeCheck::Valid) => (),
        Ok(CodeCheck::InvalidOrExpired) => {
            return response_400("Invalid or expired verification code.")
        }
        Err(e) => return response_500(e),
    }

    if let Err(e) = UserMutation::mark_email_verified(&data.conn, user).await {
        return response_500(e);
    }

    HttpResponse::Ok().json(SuccessResponse {
        message: "Email verified successfully.".to_string(),
    })
}
