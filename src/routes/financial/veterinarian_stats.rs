use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};
use chrono::Utc;

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_500},
    services::financial::FinancialQuery,
    startup::AppState,
};

#[tracing::instrument(name = "Computing veterinarian statistics", skip(data, user))]
#[get("/veterinarian/my-stats")]
pub async fn veterinarian_stats(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::Veterinarian]) {
        return forbidden;
    }

    match FinancialQuery::veterinarian_stats(&data.conn, user.id, Utc::now().date_naive()).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => response_500(e),
    }
}
