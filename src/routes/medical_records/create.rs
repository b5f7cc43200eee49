use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use chrono::NaiveDate;

use crate::{
    entities::{
        sea_orm_active_enums::{MedicalRecordType, UserRole},
        user as user_entity,
    },
    routes::utils::{forbid_unless, response_400, response_401, response_500},
    services::{
        appointment::AppointmentQuery,
        medical_record::{MedicalRecordMutation, NewMedicalRecord},
        pet::PetQuery,
    },
    startup::AppState,
    types::MedicalRecordVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    pet_id: uuid::Uuid,
    appointment_id: Option<uuid::Uuid>,
    record_type: MedicalRecordType,
    title: String,
    description: Option<String>,
    diagnosis: Option<String>,
    treatment: Option<String>,
    prescription: Option<String>,
    symptoms: Option<String>,
    temperature_c: Option<f64>,
    weight_kg: Option<f64>,
    heart_rate: Option<String>,
    blood_pressure: Option<String>,
    cost: Option<f64>,
    next_visit_date: Option<NaiveDate>,
    notes: Option<String>,
}

#[tracing::instrument(name = "Creating a medical record", skip(data, user, req), fields(record_title = %req.title))]
#[post("")]
pub async fn create_medical_record(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<RequestBody>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::Veterinarian]) {
        return forbidden;
    }

    match PetQuery::find_by_id(&data.conn, req.pet_id).await {
        Ok(Some(_)) => (),
        Ok(None) => return response_400("Pet not found."),
        Err(e) => return response_500(e),
    }
    if let Some(appointment_id) = req.appointment_id {
        match AppointmentQuery::find_by_id(&data.conn, appointment_id).await {
            Ok(Some(_)) => (),
            Ok(None) => return response_400("Appointment not found."),
            Err(e) => return response_500(e),
        }
    }

    let req = req.into_inner();
    match MedicalRecordMutation::create(
        &data.conn,
        NewMedicalRecord {
            pet_id: req.pet_id,
            veterinarian_id: user.id,
            appointment_id: req.appointment_id,
            record_type: req.record_type,
            title: req.title,
            description: req.description,
            diagnosis: req.diagnosis,
            treatment: req.treatment,
            prescription: req.prescription,
            symptoms: req.symptoms,
            temperature_c: req.temperature_c,
            weight_kg: req.weight_kg,
            heart_rate: req.heart_rate,
            blood_pressure: req.blood_pressure,
            cost: req.cost,
            next_visit_date: req.next_visit_date,
            notes: req.notes,
        },
    )
    .await
    {
        Ok(record) => HttpResponse::Ok().json(MedicalRecordVisible::from(record)),
        Err(e) => response_500(e),
    }
}
