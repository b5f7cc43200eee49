mod approve;
mod create;
mod delete;
mod list_all;
mod list_by_veterinarian;
mod pending;

use actix_web::web::{scope, ServiceConfig};
use approve::approve_review;
use create::create_review;
use delete::delete_review;
use list_all::list_all_reviews;
use list_by_veterinarian::list_veterinarian_reviews;
use pending::list_pending_reviews;

pub fn review_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/reviews")
            .service(list_all_reviews)
            .service(list_pending_reviews)
            .service(list_veterinarian_reviews)
            .service(create_review)
            .service(approve_review)
            .service(delete_review),
    );
}
