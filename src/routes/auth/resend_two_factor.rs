use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};

use crate::{
    routes::utils::{response_400, response_404, response_500},
    services::{user::UserQuery, verification_code::TwoFactorCodes},
    startup::AppState,
    types::SuccessResponse,
    utils::emails,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
pub struct RequestBody {
    pub email: String,
}

#[tracing::instrument(name = "Resending a two-factor code", skip(data, req), fields(user_email = &req.email))]
#[post("/resend-2fa")]
pub async fn resend_two_factor(data: Data<AppState>, req: Json<RequestBody>) -> HttpResponse {
    let settings = crate::settings::get_settings().expect("Failed to read settings.");

    let user = match UserQuery::find_active_by_email(&data.conn, &req.email).await {
        Ok(Some(user)) => user,
        Ok(None) => return response_404("User not found."),
        Err(e) => return response_500(e),
    };

    match TwoFactorCodes::cooldown_remaining(
        &data.conn,
        user.id,
        settings.verification.two_factor_resend_cooldown_minutes,
    )
    .await
    {
        Ok(Some(seconds)) => {
            return response_400(&format!(
                "Please wait {} seconds before requesting a new code.",
                seconds.max(0)
            ))
        }
        Ok(None) => (),
        Err(e) => return response_500(e),
    }

    let code = match TwoFactorCodes::issue(
        &data.conn,
        user.id,
        None,
        settings.verification.two_factor_expiration_minutes,
    )
    .await
    {
        Ok(code) => code,
        Err(e) => return response_500(e),
    };

    if let Err(e) = emails::send_code_email(
        "4Paw Veterinary Clinic - Your sign-in code".to_string(),
        user.email.clone(),
        user.first_name.clone(),
        user.last_name.clone(),
        "two_factor_code_email.html",
        code.code.clone(),
        settings.verification.two_factor_expiration_minutes,
    )
    .await
    {
        tracing::event!(target: "backend", tracing::Level::ERROR, "Two-factor email failed: {}", e);
        return response_500(e);
    }

    HttpResponse::Ok().json(SuccessResponse {
        message: "A new verification code was sent to your email.".to_string(),
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
    use sea_orm::{ActiveModelTrait, DbConn, DbErr};

    use super::*;
    use crate::test_utils::{self, factory};

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/auth").service(resend_two_factor))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn happy_path_without_a_recent_code() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let user = factory::user().insert(&db).await?;

        let req = test::TestRequest::post()
            .uri("/auth/resend-2fa")
            .set_json(RequestBody {
                email: user.email.clone(),
            })
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        Ok(())
    }

    #[actix_web::test]
    async fn cooldown_blocks_an_immediate_resend() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let user = factory::user().insert(&db).await?;
        TwoFactorCodes::issue(&db, user.id, None, 10).await?;

        let req = test::TestRequest::post()
            .uri("/auth/resend-2fa")
            .set_json(RequestBody {
                email: user.email.clone(),
            })
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[actix_web::test]
    async fn not_found_for_unknown_email() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;

        let req = test::TestRequest::post()
            .uri("/auth/resend-2fa")
            .set_json(RequestBody {
                email: "nobody@test.com".to_string(),
            })
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

        Ok(())
    }
}
