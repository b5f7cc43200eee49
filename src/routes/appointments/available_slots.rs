use actix_web::{
    get,
    web::{Data, Query, ReqData},
    HttpResponse,
};
use chrono::NaiveDate;

use crate::{
    entities::user as user_entity,
    routes::utils::{response_401, response_404, response_500},
    services::{appointment::AppointmentQuery, schedule, user::UserQuery},
    startup::AppState,
    types::AvailableSlots,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct QueryParams {
    veterinarian_id: uuid::Uuid,
    date: NaiveDate,
}

#[tracing::instrument(name = "Computing available time slots", skip(data, user, params))]
#[get("/available-slots")]
pub async fn available_slots(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    params: Query<QueryParams>,
) -> HttpResponse {
    if user.is_none() {
        return response_401();
    }

    let veterinarian =
        match UserQuery::find_veterinarian(&data.conn, params.veterinarian_id).await {
            Ok(Some(veterinarian)) => veterinarian,
            Ok(None) => return response_404("Veterinarian not found."),
            Err(e) => return response_500(e),
        };

    let booked = match AppointmentQuery::find_on_date(
        &data.conn,
        params.veterinarian_id,
        params.date,
    )
    .await
    {
        Ok(appointments) => appointments
            .into_iter()
            .map(|a| (a.start_time, a.end_time))
            .collect::<Vec<_>>(),
        Err(e) => return response_500(e),
    };

    let slots = schedule::available_slots(
        veterinarian.work_start_time,
        veterinarian.work_end_time,
        &booked,
    );

    HttpResponse::Ok().json(AvailableSlots {
        veterinarian_id: params.veterinarian_id,
        date: params.date,
        slots,
    })
}
