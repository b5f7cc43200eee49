mod create;
mod delete;
mod get;
mod list;
mod top_level;
mod update;

use actix_web::web::{scope, ServiceConfig};
use create::create_category;
use delete::delete_category;
use get::get_category;
use list::list_categories;
use top_level::list_top_level_categories;
use update::update_category;

pub fn category_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/categories")
            .service(list_categories)
            .service(list_top_level_categories)
            .service(create_category)
            .service(get_category)
            .service(update_category)
            .service(delete_category),
    );
}
