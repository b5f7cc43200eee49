use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use chrono::NaiveDate;

use crate::{
    entities::{
        sea_orm_active_enums::{MedicalRecordType, UserRole},
        user as user_entity,
    },
    routes::utils::{response_401, response_403, response_404, response_500},
    services::medical_record::{MedicalRecordChanges, MedicalRecordMutation, MedicalRecordQuery},
    startup::AppState,
    types::MedicalRecordVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    record_id: uuid::Uuid,
}

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    record_type: Option<MedicalRecordType>,
    title: Option<String>,
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

#[tracing::instrument(name = "Updating a medical record", skip(data, user, path_param, req))]
#[put("/{record_id}")]
pub async fn update_medical_record(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
    req: Json<RequestBody>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    let record = match MedicalRecordQuery::find_by_id(&data.conn, path_param.record_id).await {
        Ok(Some(record)) => record,
        Ok(None) => return response_404("Medical record not found."),
        Err(e) => return response_500(e),
    };
    // Only the authoring veterinarian (or an admin) may rewrite history.
    if !(user.role == UserRole::Admin
        || (user.role == UserRole::Veterinarian && record.veterinarian_id == user.id))
    {
        return response_403();
    }

    let req = req.into_inner();
    match MedicalRecordMutation::update(
        &data.conn,
        record,
        MedicalRecordChanges {
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
        Ok(updated) => HttpResponse::Ok().json(MedicalRecordVisible::from(updated)),
        Err(e) => response_500(e),
    }
}
