use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_404, response_500},
    services::category::{CategoryMutation, CategoryQuery},
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    category_id: uuid::Uuid,
}

/// Soft delete; services keep their category reference.
#[tracing::instrument(name = "Deleting a category", skip(data, user, path_param))]
#[delete("/{category_id}")]
pub async fn delete_category(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
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
    match CategoryMutation::deactivate(&data.conn, category).await {
        Ok(_) => HttpResponse::NoContent().into(),
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
                .service(scope("/categories").service(delete_category))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn deletion_only_deactivates() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let admin = factory::user().role(UserRole::Admin).insert(&db).await?;
        let existing = factory::category().insert(&db).await?;

        let req = test::TestRequest::delete()
            .uri(&format!("/categories/{}", existing.id))
            .to_request();
        req.extensions_mut().insert(admin.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::NO_CONTENT);

        let in_db = category::Entity::find_by_id(existing.id).one(&db).await?.unwrap();
        assert!(!in_db.is_active);

        Ok(())
    }
}
