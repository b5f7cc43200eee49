mod available_slots;
mod cancel;
mod complete;
mod create;
mod delete;
mod get;
mod list;
mod list_by_pet;
mod list_by_user;
mod list_my;
mod mark_paid;
mod update;

use actix_web::web::{scope, ServiceConfig};
use cancel::cancel_appointment;
use complete::complete_appointment;
use create::create_appointment;
use delete::delete_appointment;
use get::get_appointment;
use list::list_appointments;
use list_by_pet::list_appointments_by_pet;
use list_by_user::list_appointments_by_user;
use list_my::list_my_appointments;
use update::update_appointment;

pub fn appointment_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/appointments")
            .service(list_appointments)
            .service(list_my_appointments)
            .service(available_slots::available_slots)
            .service(list_appointments_by_user)
            .service(list_appointments_by_pet)
            .service(create_appointment)
            .service(get_appointment)
            .service(update_appointment)
            .service(complete_appointment)
            .service(cancel_appointment)
            .service(mark_paid::mark_paid)
            .service(delete_appointment),
    );
}
