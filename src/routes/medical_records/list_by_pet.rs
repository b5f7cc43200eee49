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
    pet_id: uuid::Uuid,
}

#[tracing::instrument(name = "Listing a pet's medical history", skip(data, user, path_param))]
#[get("/pet/{pet_id}")]
pub async fn list_medical_records_by_pet(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    let pet = match PetQuery::find_by_id(&data.conn, path_param.pet_id).await {
        Ok(Some(pet)) => pet,
        Ok(None) => return response_404("Pet not found."),
        Err(e) => return response_500(e),
    };
    if user.role == UserRole::PetOwner && pet.owner_id != user.id {
        return response_403();
    }

    match MedicalRecordQuery::list_by_pet(&data.conn, path_param.pet_id).await {
        Ok(records) => HttpResponse::Ok().json(
            records
                .into_iter()
                .map(MedicalRecordVisible::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => response_500(e),
    }
}
