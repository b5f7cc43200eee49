use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_400, response_401, response_500},
    services::category::{CategoryMutation, CategoryQuery, NewCategory},
    startup::AppState,
    types::CategoryVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    name: String,
    description: Option<String>,
    parent_id: Option<uuid::Uuid>,
    category_type: Option<String>,
    target_species: Option<String>,
    sort_order: Option<i32>,
}

#[tracing::instrument(name = "Creating a category", skip(data, user, req), fields(category_name = %req.name))]
#[post("")]
pub async fn create_category(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<RequestBody>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::Admin]) {
        return forbidden;
    }

    if let Some(parent_id) = req.parent_id {
        match CategoryQuery::find_by_id(&data.conn, parent_id).await {
            Ok(Some(_)) => (),
            Ok(None) => return response_400("Parent category not found."),
            Err(e) => return response_500(e),
        }
    }

    let req = req.into_inner();
    match CategoryMutation::create(
        &data.conn,
        NewCategory {
            name: req.name,
            description: req.description,
            parent_id: req.parent_id,
            category_type: req.category_type,
            target_species: req.target_species,
            sort_order: req.sort_order,
        },
    )
    .await
    {
        Ok(category) => HttpResponse::Ok().json(CategoryVisible::from(category)),
        Err(e) => response_500(e),
    }
}
