use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use chrono::NaiveDate;

use crate::{
    entities::{
        sea_orm_active_enums::{AppointmentType, UserRole},
        user as user_entity,
    },
    notifications::{AppointmentEvent, Outbound},
    routes::utils::{response_400, response_401, response_403, response_409, response_500},
    services::{
        appointment::{AppointmentMutation, AppointmentQuery, NewAppointment},
        pet::PetQuery,
        schedule,
        user::UserQuery,
    },
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    pet_id: uuid::Uuid,
    veterinarian_id: uuid::Uuid,
    service_id: Option<uuid::Uuid>,
    date: NaiveDate,
    /// HH:MM
    start_time: String,
    /// HH:MM
    end_time: String,
    appointment_type: AppointmentType,
    reason: Option<String>,
    notes: Option<String>,
    estimated_cost: Option<f64>,
}

#[tracing::instrument(name = "Creating an appointment", skip(data, user, req))]
#[post("")]
pub async fn create_appointment(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<RequestBody>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if user.role == UserRole::VetTechnician {
        return response_403();
    }

    let pet = match PetQuery::find_by_id(&data.conn, req.pet_id).await {
        Ok(Some(pet)) => pet,
        Ok(None) => return response_400("Pet not found."),
        Err(e) => return response_500(e),
    };
    if user.role == UserRole::PetOwner && pet.owner_id != user.id {
        return response_403();
    }

    match UserQuery::find_veterinarian(&data.conn, req.veterinarian_id).await {
        Ok(Some(_)) => (),
        Ok(None) => return response_400("Veterinarian not found."),
        Err(e) => return response_500(e),
    }

    let (start_time, end_time) = match (
        schedule::parse_time(&req.start_time),
        schedule::parse_time(&req.end_time),
    ) {
        (Some(start), Some(end)) => (start, end),
        _ => return response_400("Invalid time format. Use HH:MM (e.g. 22:15)."),
    };
    if start_time >= end_time {
        return response_400("The start time must be before the end time.");
    }

    // Plain query filter, same as the slot list; two simultaneous requests
    // can still race past it.
    match AppointmentQuery::find_overlapping(
        &data.conn,
        req.veterinarian_id,
        req.date,
        start_time,
        end_time,
    )
    .await
    {
        Ok(overlapping) if !overlapping.is_empty() => {
            return response_409("This time slot is already taken.")
        }
        Ok(_) => (),
        Err(e) => return response_500(e),
    }

    let req = req.into_inner();
    let appointment = match AppointmentMutation::create(
        &data.conn,
        NewAppointment {
            pet_id: req.pet_id,
            veterinarian_id: req.veterinarian_id,
            service_id: req.service_id,
            date: req.date,
            start_time,
            end_time,
            appointment_type: req.appointment_type,
            reason: req.reason,
            notes: req.notes,
            estimated_cost: req.estimated_cost,
        },
    )
    .await
    {
        Ok(appointment) => appointment,
        Err(e) => return response_500(e),
    };

    if let Ok(Some(owner)) = UserQuery::find_by_id(&data.conn, pet.owner_id).await {
        data.notifier.publish(Outbound::Appointment {
            owner_id: owner.id,
            owner_email: owner.email.clone(),
            owner_name: owner.full_name(),
            event: AppointmentEvent::Scheduled,
            pet_name: pet.name.clone(),
            date: appointment.date,
            start_time: schedule::format_time(appointment.start_time),
        });
    }

    match AppointmentQuery::with_display(&data.conn, vec![appointment]).await {
        Ok(mut visible) => match visible.pop() {
            Some(visible) => HttpResponse::Ok().json(visible),
            None => response_500("Created appointment vanished."),
        },
        Err(e) => response_500(e),
    }
}
