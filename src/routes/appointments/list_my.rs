use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_500},
    services::appointment::AppointmentQuery,
    startup::AppState,
};

#[tracing::instrument(name = "Listing the veterinarian's appointments", skip(data, user))]
#[get("/my")]
pub async fn list_my_appointments(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::Veterinarian]) {
        return forbidden;
    }

    let appointments = match AppointmentQuery::list_by_veterinarian(&data.conn, user.id).await {
        Ok(appointments) => appointments,
        Err(e) => return response_500(e),
    };
    match AppointmentQuery::with_display(&data.conn, appointments).await {
        Ok(visible) => HttpResponse::Ok().json(visible),
        Err(e) => response_500(e),
    }
}
