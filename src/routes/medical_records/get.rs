use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{response_401, response_403, response_404, response_500},
    services::{medical_record::MedicalRecordQuery, pet::PetQuery},
    startup::AppState,
    types::MedicalRecordVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    record_id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting a medical record", skip(data, user, path_param))]
#[get("/{record_id}")]
pub async fn get_medical_record(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
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
    if user.role == UserRole::PetOwner {
        match PetQuery::find_by_id(&data.conn, record.pet_id).await {
            Ok(Some(pet)) if pet.owner_id == user.id => (),
            Ok(_) => return response_403(),
            Err(e) => return response_500(e),
        }
    }
    HttpResponse::Ok().json(MedicalRecordVisible::from(record))
}
