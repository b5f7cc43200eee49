use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{response_401, response_403, response_500},
    services::pet::PetQuery,
    startup::AppState,
    types::PetVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    owner_id: uuid::Uuid,
}

#[tracing::instrument(name = "Listing pets by owner", skip(data, user, path_param))]
#[get("/owner/{owner_id}")]
pub async fn list_pets_by_owner(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            let is_self = user.id == path_param.owner_id;
            let is_staff = !matches!(user.role, UserRole::PetOwner);
            if !is_self && !is_staff {
                return response_403();
            }
            match PetQuery::find_by_owner(&data.conn, path_param.owner_id).await {
                Ok(pets) => HttpResponse::Ok()
                    .json(pets.into_iter().map(PetVisible::from).collect::<Vec<_>>()),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
