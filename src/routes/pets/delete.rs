use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_404, response_500},
    services::pet::{PetMutation, PetQuery},
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    pet_id: uuid::Uuid,
}

/// Soft delete; the record and its history stay in the database.
#[tracing::instrument(name = "Deleting a pet", skip(data, user, path_param))]
#[delete("/{pet_id}")]
pub async fn delete_pet(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            if let Some(forbidden) =
                forbid_unless(&user, &[UserRole::Admin, UserRole::Veterinarian])
            {
                return forbidden;
            }
            let pet = match PetQuery::find_by_id(&data.conn, path_param.pet_id).await {
                Ok(Some(pet)) => pet,
                Ok(None) => return response_404("Pet not found."),
                Err(e) => return response_500(e),
            };
            match PetMutation::deactivate(&data.conn, pet).await {
                Ok(_) => HttpResponse::NoContent().into(),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
