use actix_web::{get, web::Data, HttpResponse};

use crate::{
    routes::utils::response_500, services::category::CategoryQuery, startup::AppState,
    types::CategoryVisible,
};

#[tracing::instrument(name = "Listing top-level categories", skip(data))]
#[get("/top-level")]
pub async fn list_top_level_categories(data: Data<AppState>) -> HttpResponse {
    match CategoryQuery::list_top_level(&data.conn).await {
        Ok(categories) => HttpResponse::Ok().json(
            categories
                .into_iter()
                .map(CategoryVisible::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => response_500(e),
    }
}
