use actix_web::{
    post,
    rt::task,
    web::{Json, ReqData},
    HttpResponse,
};

use crate::{
    entities::user as user_entity,
    routes::utils::response_401,
    utils::auth::password::verify_password,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    password: String,
}

/// Re-checks the caller's own password, e.g. before a sensitive action.
#[tracing::instrument(name = "Verifying the caller's password", skip(user, req))]
#[post("/verify-password")]
pub async fn verify_password_route(
    user: Option<ReqData<user_entity::Model>>,
    req: Json<RequestBody>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            let supplied = req.password.clone();
            let valid = task::spawn_blocking(move || {
                verify_password(&user.password, supplied.as_bytes())
            })
            .await
            .expect("Unable to unwrap JoinError.")
            .is_ok();
            HttpResponse::Ok().json(serde_json::json!({ "valid": valid }))
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
    use sea_orm::{ActiveModelTrait, DbErr};

    use super::*;
    use crate::test_utils::{self, factory};

    async fn init_app(
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(App::new().service(scope("/users").service(verify_password_route)))
            .await
    }

    #[actix_web::test]
    async fn reports_whether_the_password_matches() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app().await;
        let user = factory::user().insert(&db).await?;

        for (password, expected) in [("password", true), ("wrong", false)] {
            let req = test::TestRequest::post()
                .uri("/users/verify-password")
                .set_json(RequestBody {
                    password: password.to_string(),
                })
                .to_request();
            req.extensions_mut().insert(user.clone());

            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), http::StatusCode::OK);
            let body: serde_json::Value = test::read_body_json(res).await;
            assert_eq!(body["valid"], expected);
        }

        Ok(())
    }
}
