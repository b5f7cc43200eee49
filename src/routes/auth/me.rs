use actix_web::{get, web::ReqData, HttpResponse};

use crate::{routes::utils::response_401, utils::auth::jwt::Claims};

#[tracing::instrument(name = "Reading the current token claims", skip(claims))]
#[get("/me")]
pub async fn get_me(claims: Option<ReqData<Claims>>) -> HttpResponse {
    match claims {
        Some(claims) => {
            let claims = claims.into_inner();
            HttpResponse::Ok().json(serde_json::json!({
                "user_id": claims.sub,
                "email": claims.email,
                "username": claims.username,
                "first_name": claims.first_name,
                "last_name": claims.last_name,
                "role": claims.role,
                "permissions": claims.permissions,
            }))
        }
        None => response_401(),
    }
}
