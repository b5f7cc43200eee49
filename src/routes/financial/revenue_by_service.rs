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

#[tracing::instrument(name = "Computing clinic revenue by service", skip(data, user))]
#[get("/admin/revenue-by-services")]
pub async fn admin_revenue_by_services(
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

    match FinancialQuery::revenue_by_service(&data.conn, None).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => response_500(e),
    }
}
