use actix_web::{
    patch,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_404, response_500},
    services::user::{UserMutation, UserQuery},
    startup::AppState,
    types::UserVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deactivating a user", skip(data, user, path_param))]
#[patch("/{user_id}/deactivate")]
pub async fn deactivate_user(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            if let Some(forbidden) = forbid_unless(&user, &[UserRole::Admin]) {
                return forbidden;
            }
            let target = match UserQuery::find_by_id(&data.conn, path_param.user_id).await {
                Ok(Some(target)) => target,
                Ok(None) => return response_404("User not found."),
                Err(e) => return response_500(e),
            };
            match UserMutation::set_active(&data.conn, target, false).await {
                Ok(updated) => HttpResponse::Ok().json(UserVisible::from(updated)),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
