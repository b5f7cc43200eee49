use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_500},
    services::user::UserQuery,
    startup::AppState,
    types::UserVisible,
};

#[tracing::instrument(name = "Listing users", skip(data, user))]
#[get("")]
pub async fn list_users(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            if let Some(forbidden) =
                forbid_unless(&user, &[UserRole::Admin, UserRole::Receptionist])
            {
                return forbidden;
            }
            match UserQuery::find_all(&data.conn).await {
                Ok(users) => HttpResponse::Ok().json(
                    users
                        .into_iter()
                        .map(UserVisible::from)
                        .collect::<Vec<_>>(),
                ),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
