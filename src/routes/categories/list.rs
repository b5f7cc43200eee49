use actix_web::{get, web::Data, HttpResponse};

use crate::{
    routes::utils::response_500, services::category::CategoryQuery, startup::AppState,
    types::CategoryVisible,
};

/// Public; active categories in display order.
#[tracing::instrument(name = "Listing categories", skip(data))]
#[get("")]
pub async fn list_categories(data: Data<AppState>) -> HttpResponse {
    match CategoryQuery::list_active(&data.conn).await {
        Ok(categories) => HttpResponse::Ok().json(
            categories
                .into_iter()
                .map(CategoryVisible::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => response_500(e),
    }
}
