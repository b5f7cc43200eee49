use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_404, response_500},
    services::category::{CategoryChanges, CategoryMutation, CategoryQuery},
    startup::AppState,
    types::CategoryVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    category_id: uuid::Uuid,
}

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    name: Option<String>,
    description: Option<String>,
    category_type: Option<String>,
    target_species: Option<String>,
    sort_order: Option<i32>,
    is_active: Option<bool>,
}

#[tracing::instrument(name = "Updating a category", skip(data, user, path_param, req))]
#[put("/{category_id}")]
pub async fn update_category(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
    req: Json<RequestBody>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::Admin]) {
        return forbidden;
    }

    let category = match CategoryQuery::find_by_id(&data.conn, path_param.category_id).await {
        Ok(Some(category)) => category,
        Ok(None) => return response_404("Category not found."),
        Err(e) => return response_500(e),
    };
    let req = req.into_inner();
    match CategoryMutation::update(
        &data.conn,
        category,
        CategoryChanges {
            name: req.name,
            description: req.description,
            category_type: req.category_type,
            target_species: req.target_species,
            sort_order: req.sort_order,
            is_active: req.is_active,
        },
    )
    .await
    {
        Ok(updated) => HttpResponse::Ok().json(CategoryVisible::from(updated)),
        Err(e) => response_500(e),
    }
}

#[cfg(test)]
mod tests {
    use actix_http::Request;
    use actix_web::{
        dev::{Service, ServiceResponse},
        http, test,
        web::scope,
        App, HttpMessage,
    };
    use sea_orm::{entity::prelude::*, ActiveModelTrait, DbConn, DbErr};

    use super::*;
    use crate::{
        entities::category,
        test_utils::{self, factory::{self, UserFactory}},
    };

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/categories").service(update_category))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn admin_renames_and_reorders() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let admin = factory::user().role(UserRole::Admin).insert(&db).await?;
        let existing = factory::category().insert(&db).await?;

        let req = test::TestRequest::put()
            .uri(&format!("/categories/{}", existing.id))
            .set_json(RequestBody {
                name: Some("Preventive Care".to_string()),
                description: None,
                category_type: None,
                target_species: None,
                sort_order: Some(9),
                is_active: None,
            })
            .to_request();
        req.extensions_mut().insert(admin.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let in_db = category::Entity::find_by_id(existing.id).one(&db).await?.unwrap();
        assert_eq!(in_db.name, "Preventive Care");
        assert_eq!(in_db.sort_order, 9);

        Ok(())
    }

    #[actix_web::test]
    async fn forbidden_for_non_admins() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let existing = factory::category().insert(&db).await?;

        let req = test::TestRequest::put()
            .uri(&format!("/categories/{}", existing.id))
            .set_json(RequestBody {
                name: Some("Nope".to_string()),
                description: None,
                category_type: None,
                target_species: None,
                sort_order: None,
                is_active: None,
            })
            .to_request();
        req.extensions_mut().insert(veterinarian.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

        Ok(())
    }
}
