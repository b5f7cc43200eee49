use actix_web::{
    patch,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_404, response_500},
    services::appointment::{AppointmentMutation, AppointmentQuery},
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    appointment_id: uuid::Uuid,
}

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    actual_cost: f64,
    notes: Option<String>,
}

#[tracing::instrument(name = "Completing an appointment", skip(data, user, path_param, req))]
#[patch("/{appointment_id}/complete")]
pub async fn complete_appointment(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
    req: Json<RequestBody>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::Admin, UserRole::Veterinarian]) {
        return forbidden;
    }

    let appointment = match AppointmentQuery::find_by_id(&data.conn, path_param.appointment_id)
        .await
    {
        Ok(Some(appointment)) => appointment,
        Ok(None) => return response_404("Appointment not found."),
        Err(e) => return response_500(e),
    };

    let req = req.into_inner();
    match AppointmentMutation::complete(&data.conn, appointment, req.actual_cost, req.notes).await
    {
        Ok(_) => HttpResponse::NoContent().into(),
        Err(e) => response_500(e),
    }
}
