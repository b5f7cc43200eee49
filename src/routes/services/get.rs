use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};

use crate::{
    routes::utils::{response_404, response_500},
    services::service::ServiceQuery,
    startup::AppState,
    types::ServiceVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    service_id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting a service", skip(data, path_param))]
#[get("/{service_id}")]
pub async fn get_service(data: Data<AppState>, path_param: Path<PathParam>) -> HttpResponse {
    match ServiceQuery::find_by_id(&data.conn, path_param.service_id).await {
        Ok(Some(service)) => HttpResponse::Ok().json(ServiceVisible::from(service)),
        Ok(None) => response_404("Service not found."),
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
    use crate::test_utils::{self, factory};

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/services").service(get_service))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn happy_path() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let category = factory::category().insert(&db).await?;
        let service = factory::service(category.id).insert(&db).await?;

        let req = test::TestRequest::get()
            .uri(&format!("/services/{}", service.id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let body: ServiceVisible = test::read_body_json(res).await;
        assert_eq!(body.id, service.id);
        assert_eq!(body.price, service.price);

        Ok(())
    }

    #[actix_web::test]
    async fn not_found_for_unknown_service() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;

        let req = test::TestRequest::get()
            .uri(&format!("/services/{}", uuid::Uuid::new_v4()))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

        Ok(())
    }
}
