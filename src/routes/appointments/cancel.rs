use actix_web::{
    patch,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    notifications::{AppointmentEvent, Outbound},
    routes::utils::{response_401, response_403, response_404, response_500},
    services::{
        appointment::{AppointmentMutation, AppointmentQuery},
        pet::PetQuery,
        schedule,
        user::UserQuery,
    },
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    appointment_id: uuid::Uuid,
}

#[tracing::instrument(name = "Cancelling an appointment", skip(data, user, path_param))]
#[patch("/{appointment_id}/cancel")]
pub async fn cancel_appointment(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };

    let appointment = match AppointmentQuery::find_by_id(&data.conn, path_param.appointment_id)
        .await
    {
        Ok(Some(appointment)) => appointment,
        Ok(None) => return response_404("Appointment not found."),
        Err(e) => return response_500(e),
    };

    let pet = match PetQuery::find_by_id(&data.conn, appointment.pet_id).await {
        Ok(Some(pet)) => pet,
        Ok(None) => return response_404("Pet not found."),
        Err(e) => return response_500(e),
    };

    // Staff cancel anything; an owner only their own pet's appointment.
    match user.role {
        UserRole::Admin | UserRole::Veterinarian => (),
        UserRole::PetOwner => {
            if pet.owner_id != user.id {
                return response_403();
            }
        }
        _ => return response_403(),
    }

    let appointment = match AppointmentMutation::cancel(&data.conn, appointment).await {
        Ok(appointment) => appointment,
        Err(e) => return response_500(e),
    };

    if let Ok(Some(owner)) = UserQuery::find_by_id(&data.conn, pet.owner_id).await {
        data.notifier.publish(Outbound::Appointment {
            owner_id: owner.id,
            owner_email: owner.email.clone(),
            owner_name: owner.full_name(),
            event: AppointmentEvent::Cancelled,
            pet_name: pet.name.clone(),
            date: appointment.date,
            start_time: schedule::format_time(appointment.start_time),
        });
    }

    HttpResponse::NoContent().into()
}
