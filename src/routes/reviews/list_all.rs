use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_500},
    services::review::ReviewQuery,
    startup::AppState,
};

#[tracing::instrument(name = "Listing all reviews", skip(data, user))]
#[get("/all")]
pub async fn list_all_reviews(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::Admin]) {
        return forbidden;
    }

    let reviews = match ReviewQuery::list_all(&data.conn).await {
        Ok(reviews) => reviews,
        Err(e) => return response_500(e),
    };
    match ReviewQuery::with_names(&data.conn, reviews).await {
        Ok(visible) => HttpResponse::Ok().json(visible),
        Err(e) => response_500(e),
    }
}
