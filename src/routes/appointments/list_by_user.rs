use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{response_401, response_403, response_500},
    services::appointment::AppointmentQuery,
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: uuid::Uuid,
}

/// Appointments whose pet belongs to the given user.
#[tracing::instrument(name = "Listing appointments by owner", skip(data, user, path_param))]
#[get("/user/{user_id}")]
pub async fn list_appointments_by_user(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if user.role == UserRole::PetOwner && user.id != path_param.user_id {
        return response_403();
    }

    let appointments =
        match AppointmentQuery::list_by_owner(&data.conn, path_param.user_id).await {
            Ok(appointments) => appointments,
            Err(e) => return response_500(e),
        };
    match AppointmentQuery::with_display(&data.conn, appointments).await {
        Ok(visible) => HttpResponse::Ok().json(visible),
        Err(e) => response_500(e),
    }
}
