mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{scope, ServiceConfig};
use create::create_service;
use delete::delete_service;
use get::get_service;
use list::list_services;
use update::update_service;

pub fn service_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/services")
            .service(list_services)
            .service(create_service)
            .service(get_service)
            .service(update_service)
            .service(delete_service),
    );
}
