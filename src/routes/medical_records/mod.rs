mod create;
mod delete;
mod get;
mod list_by_pet;
mod update;

use actix_web::web::{scope, ServiceConfig};
use create::create_medical_record;
use delete::delete_medical_record;
use get::get_medical_record;
use list_by_pet::list_medical_records_by_pet;
use update::update_medical_record;

pub fn medical_record_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/medical-records")
            .service(list_medical_records_by_pet)
            .service(create_medical_record)
            .service(get_medical_record)
            .service(update_medical_record)
            .service(delete_medical_record),
    );
}
