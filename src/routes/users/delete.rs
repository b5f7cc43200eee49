use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_404, response_500},
    services::user::{UserMutation, UserQuery},
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a user", skip(data, user, path_param))]
#[delete("/{user_id}")]
pub async fn delete_user(
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
            match UserMutation::delete(&data.conn, target).await {
                Ok(_) => HttpResponse::NoContent().into(),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
