mod create;
mod create_my;
mod delete;
mod delete_my;
mod get;
mod list;
mod list_all;
mod list_by_owner;
mod list_my;
mod update;
mod update_my;

use actix_web::web::{scope, ServiceConfig};
use create::create_pet;
use create_my::create_my_pet;
use delete::delete_pet;
use delete_my::delete_my_pet;
use get::get_pet;
use list::list_pets;
use list_all::list_all_pets;
use list_by_owner::list_pets_by_owner;
use list_my::list_my_pets;
use update::update_pet;
use update_my::update_my_pet;

pub fn pet_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/pets")
            .service(list_pets)
            .service(list_all_pets)
            .service(list_my_pets)
            .service(list_pets_by_owner)
            .service(create_pet)
            .service(create_my_pet)
            .service(update_my_pet)
            .service(delete_my_pet)
            .service(get_pet)
            .service(update_pet)
            .service(delete_pet),
    );
}
