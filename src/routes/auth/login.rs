use actix_web::{
    post,
    rt::task,
    web::{Data, Json},
    HttpResponse,
};

use crate::{
    routes::utils::response_500,
    services::user::{UserMutation, UserQuery},
    startup::AppState,
    types::{AuthResponse, ErrorResponse},
    utils::auth::{jwt, password::verify_password, permissions::role_permissions},
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
pub struct RequestBody {
    pub email: String,
    pub password: String,
    pub client_type: Option<String>,
}

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse {
        error: "Invalid email or password.".to_string(),
    })
}

#[tracing::instrument(name = "Logging a user in", skip(data, req_user), fields(user_email = &req_user.email))]
#[post("/login")]
pub async fn login_user(data: Data<AppState>, req_user: Json<RequestBody>) -> HttpResponse {
    let user = match UserQuery::find_active_by_email(&data.conn, &req_user.email).await {
        Ok(Some(user)) => user,
        Ok(None) => return invalid_credentials(),
        Err(e) => return response_500(e),
    };

    let stored_hash = user.password.clone();
    let supplied_password = req_user.password.clone();
    let password_matches = task::spawn_blocking(move || {
        verify_password(&stored_hash, supplied_password.as_bytes())
    })
    .await
    .expect("Unable to unwrap JoinError.");
    if password_matches.is_err() {
        tracing::event!(target: "argon2", tracing::Level::DEBUG, "Password mismatch.");
        return invalid_credentials();
    }

    let (access_token, token_expiration) = match jwt::issue_access_token(&user) {
        Ok(issued) => issued,
        Err(e) => return response_500(e),
    };
    let user = match UserMutation::record_login(&data.conn, user).await {
        Ok(user) => user,
        Err(e) => return response_500(e),
    };

    tracing::event!(target: "backend", tracing::Level::INFO, "User logged in successfully.");
    HttpResponse::Ok().json(AuthResponse {
        user_id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
        username: user.username,
        role: user.role.clone(),
        access_token,
        token_expiration,
        is_active: user.is_active,
        is_email_verified: user.is_email_verified,
        permissions: role_permissions(&user.role)
            .iter()
            .map(|permission| permission.to_string())
            .collect(),
    })
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
    use sea_orm::{entity::prelude::*, ActiveModelTrait, DbConn, DbErr};

    use super::*;
    use crate::{
        entities::{sea_orm_active_enums::UserRole, user},
        test_utils::{self, factory::{self, UserFactory}},
    };

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/auth").service(login_user))
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
            .uri("/auth/login")
            .set_json(RequestBody {
                email: user.email.clone(),
                password: "password".to_string(),
                client_type: None,
            })
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let body: AuthResponse = test::read_body_json(res).await;
        assert_eq!(body.user_id, user.id);
        assert_eq!(body.role, UserRole::PetOwner);
        assert!(body.permissions.contains(&"appointments.create".to_string()));

        let claims = crate::utils::auth::jwt::decode_access_token(&body.access_token).unwrap();
        assert_eq!(claims.sub, user.id);

        let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
        assert!(user_in_db.last_login_at.is_some());

        Ok(())
    }

    #[actix_web::test]
    async fn unauthorized_on_wrong_password() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let user = factory::user().insert(&db).await?;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(RequestBody {
                email: user.email.clone(),
                password: "not-the-password".to_string(),
                client_type: None,
            })
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[actix_web::test]
    async fn unauthorized_for_deactivated_user() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let user = factory::user().is_active(false).insert(&db).await?;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(RequestBody {
                email: user.email.clone(),
                password: "password".to_string(),
                client_type: None,
            })
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
