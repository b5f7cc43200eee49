mod activate;
mod create;
mod deactivate;
mod delete;
mod get;
mod list;
mod update;
mod verify_password;

use actix_web::web::{scope, ServiceConfig};
use activate::activate_user;
use create::create_user;
use deactivate::deactivate_user;
use delete::delete_user;
use get::get_user;
use list::list_users;
use update::update_user;
use verify_password::verify_password_route;

pub fn user_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users")
            .service(list_users)
            .service(verify_password_route)
            .service(get_user)
            .service(create_user)
            .service(update_user)
            .service(delete_user)
            .service(activate_user)
            .service(deactivate_user),
    );
}
