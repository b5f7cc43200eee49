use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};

use crate::{
    routes::utils::response_500, services::service::ServiceQuery, startup::AppState,
    types::ServiceVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct QueryParams {
    category_id: Option<uuid::Uuid>,
    featured: Option<bool>,
}

/// Public catalog; only active services are listed.
#[tracing::instrument(name = "Listing services", skip(data, params))]
#[get("")]
pub async fn list_services(data: Data<AppState>, params: Query<QueryParams>) -> HttpResponse {
    match ServiceQuery::list_active(&data.conn, params.category_id, params.featured).await {
        Ok(services) => HttpResponse::Ok().json(
            services
                .into_iter()
                .map(ServiceVisible::from)
                .collect::<Vec<_>>(),
        ),
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
        App,
    };
    use sea_orm::{ActiveModelTrait, DbConn, DbErr};

    use super::*;
    use crate::test_utils::{self, factory::{self, ServiceFactory}};

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/services").service(list_services))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn only_active_services_are_listed() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let category = factory::category().insert(&db).await?;
        let active = factory::service(category.id).insert(&db).await?;
        factory::service(category.id).is_active(false).insert(&db).await?;

        let req = test::TestRequest::get().uri("/services").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let body: Vec<ServiceVisible> = test::read_body_json(res).await;
        // The two seeded services plus the active one from this test.
        assert!(body.iter().any(|s| s.id == active.id));
        assert!(body.iter().all(|s| s.is_active));

        Ok(())
    }

    #[actix_web::test]
    async fn category_filter_narrows_the_catalog() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let category = factory::category().insert(&db).await?;
        let other_category = factory::category().insert(&db).await?;
        let service = factory::service(category.id).insert(&db).await?;
        factory::service(other_category.id).insert(&db).await?;

        let req = test::TestRequest::get()
            .uri(&format!("/services?category_id={}", category.id))
            .to_request();
        let res = test::call_service(&app, req).await;

        let body: Vec<ServiceVisible> = test::read_body_json(res).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].id, service.id);

        Ok(())
    }

    #[actix_web::test]
    async fn featured_filter_works() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let category = factory::category().insert(&db).await?;
        let featured = factory::service(category.id).is_featured(true).insert(&db).await?;
        factory::service(category.id).insert(&db).await?;

        let req = test::TestRequest::get()
            .uri("/services?featured=true")
            .to_request();
        let res = test::call_service(&app, req).await;

        let body: Vec<ServiceVisible> = test::read_body_json(res).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].id, featured.id);

        Ok(())
    }
}
