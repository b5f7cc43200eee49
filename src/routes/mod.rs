mod appointments;
mod auth;
mod categories;
mod financial;
mod medical_records;
mod pets;
mod reviews;
mod services;
mod users;
pub mod utils;

use actix_web::{web::scope, Scope};

pub use appointments::appointment_routes;
pub use auth::auth_routes;
pub use categories::category_routes;
pub use financial::financial_routes;
pub use medical_records::medical_record_routes;
pub use pets::pet_routes;
pub use reviews::review_routes;
pub use services::service_routes;
pub use users::user_routes;

pub fn api_routes() -> Scope {
    scope("/api")
        .service(health_check)
        .configure(auth_routes)
        .configure(user_routes)
        .configure(pet_routes)
        .configure(appointment_routes)
        .configure(medical_record_routes)
        .configure(service_routes)
        .configure(category_routes)
        .configure(review_routes)
        .configure(financial_routes)
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json("Application is safe and healthy.")
}
