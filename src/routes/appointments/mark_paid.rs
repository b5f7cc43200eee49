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
    payment_method: Option<String>,
    payment_transaction_id: Option<String>,
    amount: Option<f64>,
}

#[tracing::instrument(name = "Marking an appointment paid", skip(data, user, path_param, req))]
#[patch("/{appointment_id}/mark-paid")]
pub async fn mark_paid(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
    req: Json<RequestBody>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(
        &user,
        &[UserRole::Admin, UserRole::Veterinarian, UserRole::PetOwner],
    ) {
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
    match AppointmentMutation::mark_paid(
        &data.conn,
        appointment,
        req.payment_method,
        req.payment_transaction_id,
        req.amount,
    )
    .await
    {
        Ok(updated) => match AppointmentQuery::with_display(&data.conn, vec![updated]).await {
            Ok(mut visible) => match visible.pop() {
                Some(visible) => HttpResponse::Ok().json(visible),
                None => response_500("Paid appointment vanished."),
            },
            Err(e) => response_500(e),
        },
        Err(e) => response_500(e),
    }
}
