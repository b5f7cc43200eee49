use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_404, response_500},
    services::review::{ReviewMutation, ReviewQuery},
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    review_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a review", skip(data, user, path_param))]
#[delete("/{review_id}")]
pub async fn delete_review(
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

    let review = match ReviewQuery::find_by_id(&data.conn, path_param.review_id).await {
        Ok(Some(review)) => review,
        Ok(None) => return response_404("Review not found."),
        Err(e) => return response_500(e),
    };
    match ReviewMutation::delete(&data.conn, review).await {
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
        entities::review,
        test_utils::{self, factory::{self, UserFactory}},
    };

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/reviews").service(delete_review))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn admin_removes_a_review() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let admin = factory::user().role(UserRole::Admin).insert(&db).await?;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let reviewer = factory::user().insert(&db).await?;
        let existing = factory::review(veterinarian.id, reviewer.id).insert(&db).await?;

        let req = test::TestRequest::delete()
            .uri(&format!("/reviews/{}", existing.id))
            .to_request();
        req.extensions_mut().insert(admin.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::NO_CONTENT);

        let in_db = review::Entity::find_by_id(existing.id).one(&db).await?;
        assert!(in_db.is_none());

        Ok(())
    }

    #[actix_web::test]
    async fn forbidden_for_the_review_author() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let reviewer = factory::user().insert(&db).await?;
        let existing = factory::review(veterinarian.id, reviewer.id).insert(&db).await?;

        let req = test::TestRequest::delete()
            .uri(&format!("/reviews/{}", existing.id))
            .to_request();
        req.extensions_mut().insert(reviewer.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

        Ok(())
    }
}
