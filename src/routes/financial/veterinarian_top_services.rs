use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_500},
    services::financial::FinancialQuery,
    startup::AppState,
};

#[tracing::instrument(name = "Computing the veterinarian's top services", skip(data, user))]
#[get("/veterinarian/top-services")]
pub async fn veterinarian_top_services(
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

    match FinancialQuery::revenue_by_service(&data.conn, Some(user.id)).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => response_500(e),
    }
}
