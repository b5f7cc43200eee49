use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{response_401, response_403, response_404, response_500},
    services::user::UserQuery,
    startup::AppState,
    types::UserVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting a user", skip(data, user, path_param))]
#[get("/{user_id}")]
pub async fn get_user(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            let is_self = user.id == path_param.user_id;
            let is_staff = matches!(user.role, UserRole::Admin | UserRole::Receptionist);
            if !is_self && !is_staff {
                return response_403();
            }
            match UserQuery::find_by_id(&data.conn, path_param.user_id).await {
                Ok(Some(found)) => HttpResponse::Ok().json(UserVisible::from(found)),
                Ok(None) => response_404("User not found."),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
