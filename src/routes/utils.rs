use std::fmt::Debug;

use actix_web::HttpResponse;

use crate::{
    entities::{sea_orm_active_enums::UserRole, user},
    types::{ErrorResponse, INTERNAL_SERVER_ERROR_MESSAGE},
};

/// Bad Request
pub fn response_400(error_message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Unauthorized
pub fn response_401() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse {
        error: "You are not logged in.".to_string(),
    })
}

/// Forbidden
pub fn response_403() -> HttpResponse {
    HttpResponse::Forbidden().json(ErrorResponse {
        error: "You are not allowed to do this.".to_string(),
    })
}

/// NotFound
pub fn response_404(error_message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Conflict
pub fn response_409(error_message: &str) -> HttpResponse {
    HttpResponse::Conflict().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Internal Server Error: with logging
pub fn response_500<T: Debug>(e: T) -> HttpResponse {
    tracing::event!(target: "backend", tracing::Level::ERROR, "{:#?}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
    })
}

/// Some(403) unless the user holds one of the allowed roles.
pub fn forbid_unless(user: &user::Model, roles: &[UserRole]) -> Option<HttpResponse> {
    if roles.contains(&user.role) {
        None
    } else {
        Some(response_403())
    }
}
