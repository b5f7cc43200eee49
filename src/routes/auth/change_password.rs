use actix_web::{
    post,
    rt::task,
    web::{Data, Json, ReqData},
    HttpResponse,
};

use crate::{
    entities::user as user_entity,
    routes::utils::{response_400, response_401, response_500},
    services::user::UserMutation,
    startup::AppState,
    types::SuccessResponse,
    utils::auth::password,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
pub struct RequestBody {
    pub current_password: String,
    pub new_password: String,
}

#[tracing::instrument(name = "Changing a user's password", skip(data, user, req))]
#[post("/change-password")]
pub async fn change_password(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<RequestBody>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };

    let stored_hash = user.password.clone();
    let current_password = req.current_password.clone();
    let current_matches = task::spawn_blocking(move || {
        password::verify_password(&stored_hash, current_password.as_bytes())
    })
    .await
    .expect("Unable to unwrap JoinError.");
    if current_matches.is_err() {
        return response_400("Current password is incorrect.");
    }

    let new_hash = password::hash(req.new_password.as_bytes()).await;
    match UserMutation::update_password(&data.conn, user, new_hash).await {
        Ok(_) => HttpResponse::Ok().json(SuccessResponse {
            message: "Password changed successfully.".to_string(),
        }),
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
        entities::user,
        test_utils::{self, factory},
        utils::auth::password::verify_password,
    };

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/auth").service(change_password))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn happy_path() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let user = factory::user().insert(&db).await?;

        let req = test::TestRequest::post()
            .uri("/auth/change-password")
            .set_json(RequestBody {
                current_password: "password".to_string(),
                new_password: "a-better-password".to_string(),
            })
            .to_request();
        req.extensions_mut().insert(user.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
        assert!(verify_password(&user_in_db.password, "a-better-password".as_bytes()).is_ok());

        Ok(())
    }

    #[actix_web::test]
    async fn rejects_a_wrong_current_password() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let user = factory::user().insert(&db).await?;

        let req = test::TestRequest::post()
            .uri("/auth/change-password")
            .set_json(RequestBody {
                current_password: "not-my-password".to_string(),
                new_password: "a-better-password".to_string(),
            })
            .to_request();
        req.extensions_mut().insert(user.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[actix_web::test]
    async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;

        let req = test::TestRequest::post()
            .uri("/auth/change-password")
            .set_json(RequestBody {
                current_password: "password".to_string(),
                new_password: "a-better-password".to_string(),
            })
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
