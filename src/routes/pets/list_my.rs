use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};

use crate::{
    entities::user as user_entity,
    routes::utils::{response_401, response_500},
    services::pet::PetQuery,
    startup::AppState,
    types::PetVisible,
};

#[tracing::instrument(name = "Listing the caller's pets", skip(data, user))]
#[get("/my")]
pub async fn list_my_pets(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            match PetQuery::find_by_owner(&data.conn, user.id).await {
                Ok(pets) => HttpResponse::Ok()
                    .json(pets.into_iter().map(PetVisible::from).collect::<Vec<_>>()),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
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
    use sea_orm::{ActiveModelTrait, DbConn, DbErr};

    use super::*;
    use crate::test_utils::{self, factory};

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/pets").service(list_my_pets))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn owner_only_sees_their_own_pets() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let owner = factory::user().insert(&db).await?;
        let other = factory::user().insert(&db).await?;
        let mine = factory::pet(owner.id).insert(&db).await?;
        factory::pet(other.id).insert(&db).await?;

        let req = test::TestRequest::get().uri("/pets/my").to_request();
        req.extensions_mut().insert(owner.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let body: Vec<PetVisible> = test::read_body_json(res).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].id, mine.id);

        Ok(())
    }

    #[actix_web::test]
    async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;

        let req = test::TestRequest::get().uri("/pets/my").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
