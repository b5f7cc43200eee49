use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{response_401, response_403, response_500},
    services::appointment::AppointmentQuery,
    startup::AppState,
};

/// Admin sees the whole clinic; a veterinarian only their own schedule.
#[tracing::instrument(name = "Listing appointments", skip(data, user))]
#[get("")]
pub async fn list_appointments(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    let veterinarian_filter = match user.role {
        UserRole::Admin => None,
        UserRole::Veterinarian => Some(user.id),
        _ => return response_403(),
    };

    let appointments = match AppointmentQuery::list_recent(&data.conn, veterinarian_filter).await
    {
        Ok(appointments) => appointments,
        Err(e) => return response_500(e),
    };
    match AppointmentQuery::with_display(&data.conn, appointments).await {
        Ok(visible) => HttpResponse::Ok().json(visible),
        Err(e) => response_500(e),
    }
}
