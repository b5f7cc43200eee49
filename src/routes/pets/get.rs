use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{response_401, response_403, response_404, response_500},
    services::pet::PetQuery,
    startup::AppState,
    types::PetVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    pet_id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting a pet", skip(data, user, path_param))]
#[get("/{pet_id}")]
pub async fn get_pet(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            let pet = match PetQuery::find_by_id(&data.conn, path_param.pet_id).await {
                Ok(Some(pet)) => pet,
                Ok(None) => return response_404("Pet not found."),
                Err(e) => return response_500(e),
            };
            if user.role == UserRole::PetOwner && pet.owner_id != user.id {
                return response_403();
            }
            HttpResponse::Ok().json(PetVisible::from(pet))
        }
        None => response_401(),
    }
}
