use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_404, response_500},
    services::service::{ServiceMutation, ServiceQuery},
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    service_id: uuid::Uuid,
}

/// Soft delete; past appointments keep their service reference.
#[tracing::instrument(name = "Deleting a service", skip(data, user, path_param))]
#[delete("/{service_id}")]
pub async fn delete_service(
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

    let service = match ServiceQuery::find_by_id(&data.conn, path_param.service_id).await {
        Ok(Some(service)) => service,
        Ok(None) => return response_404("Service not found."),
        Err(e) => return response_500(e),
    };
    match ServiceMutation::deactivate(&data.conn, service).await {
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
        entities::service,
        test_utils::{self, factory::{self, UserFactory}},
    };

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/services").service(delete_service))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn deletion_only_deactivates() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let admin = factory::user().role(UserRole::Admin).insert(&db).await?;
        let category = factory::category().insert(&db).await?;
        let existing = factory::service(category.id).insert(&db).await?;

        let req = test::TestRequest::delete()
            .uri(&format!("/services/{}", existing.id))
            .to_request();
        req.extensions_mut().insert(admin.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::NO_CONTENT);

        let in_db = service::Entity::find_by_id(existing.id).one(&db).await?.unwrap();
        assert!(!in_db.is_active);

        Ok(())
    }

    #[actix_web::test]
    async fn forbidden_for_veterinarians() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let category = factory::category().insert(&db).await?;
        let existing = factory::service(category.id).insert(&db).await?;

        let req = test::TestRequest::delete()
            .uri(&format!("/services/{}", existing.id))
            .to_request();
        req.extensions_mut().insert(veterinarian.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

        Ok(())
    }
}
