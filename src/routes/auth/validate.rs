use actix_web::{post, web::Json, HttpResponse};

use crate::utils::auth::jwt;

/// The body is the bare token string, JSON-encoded.
#[tracing::instrument(name = "Validating an access token", skip(token))]
#[post("/validate")]
pub async fn validate_token(token: Json<String>) -> HttpResponse {
    let is_valid = jwt::decode_access_token(&token).is_ok();
    HttpResponse::Ok().json(serde_json::json!({ "is_valid": is_valid }))
}
