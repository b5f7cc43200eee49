use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};

use crate::{
    routes::utils::response_500, services::review::ReviewQuery, startup::AppState,
    types::ReviewVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    veterinarian_id: uuid::Uuid,
}

/// Public; only approved reviews are shown.
#[tracing::instrument(name = "Listing a veterinarian's reviews", skip(data, path_param))]
#[get("/veterinarian/{veterinarian_id}")]
pub async fn list_veterinarian_reviews(
    data: Data<AppState>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    let reviews = match ReviewQuery::list_approved_by_veterinarian(
        &data.conn,
        path_param.veterinarian_id,
    )
    .await
    {
        Ok(reviews) => reviews,
        Err(e) => return response_500(e),
    };
    match ReviewQuery::with_names(&data.conn, reviews).await {
        Ok(visible) => HttpResponse::Ok().json(visible),
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
    use crate::test_utils::{self, factory::{self, ReviewFactory}};

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/reviews").service(list_veterinarian_reviews))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn unapproved_reviews_are_hidden() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let reviewer = factory::user().insert(&db).await?;
        let other_reviewer = factory::user().insert(&db).await?;
        let approved = factory::review(veterinarian.id, reviewer.id).insert(&db).await?;
        factory::review(veterinarian.id, other_reviewer.id)
            .approved(false)
            .insert(&db)
            .await?;

        let req = test::TestRequest::get()
            .uri(&format!("/reviews/veterinarian/{}", veterinarian.id))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let body: Vec<ReviewVisible> = test::read_body_json(res).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].id, approved.id);

        Ok(())
    }
}
