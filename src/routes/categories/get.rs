use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};

use crate::{
    routes::utils::{response_404, response_500},
    services::category::CategoryQuery,
    startup::AppState,
    types::{CategoryVisible, CategoryWithSubcategories},
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    category_id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting a category", skip(data, path_param))]
#[get("/{category_id}")]
pub async fn get_category(data: Data<AppState>, path_param: Path<PathParam>) -> HttpResponse {
    let category = match CategoryQuery::find_by_id(&data.conn, path_param.category_id).await {
        Ok(Some(category)) => category,
        Ok(None) => return response_404("Category not found."),
        Err(e) => return response_500(e),
    };
    match CategoryQuery::list_children(&data.conn, category.id).await {
        Ok(children) => HttpResponse::Ok().json(CategoryWithSubcategories {
            category: CategoryVisible::from(category),
            subcategories: children.into_iter().map(CategoryVisible::from).collect(),
        }),
        Err(e) => response_500(e),
    }
}
