use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_409, response_500},
    services::user::{NewUser, UserMutation, UserQuery},
    startup::AppState,
    types::UserVisible,
    utils::auth::password,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    first_name: String,
    last_name: String,
    email: String,
    username: String,
    password: String,
    phone_number: Option<String>,
    address: Option<String>,
    role: UserRole,
}

#[tracing::instrument(name = "Creating a user", skip(data, user, req), fields(new_user_email = %req.email))]
#[post("")]
pub async fn create_user(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<RequestBody>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            if let Some(forbidden) =
                forbid_unless(&user, &[UserRole::Admin, UserRole::Receptionist])
            {
                return forbidden;
            }

            match UserQuery::find_by_email(&data.conn, &req.email).await {
                Ok(Some(_)) => return response_409("A user with this email already exists."),
                Ok(None) => (),
                Err(e) => return response_500(e),
            }
            match UserQuery::find_by_username(&data.conn, &req.username).await {
                Ok(Some(_)) => return response_409("This username is already taken."),
                Ok(None) => (),
                Err(e) => return response_500(e),
            }

            let hashed_password = password::hash(req.password.as_bytes()).await;
            let req = req.into_inner();
            match UserMutation::create_user(
                &data.conn,
                NewUser {
                    first_name: req.first_name,
                    last_name: req.last_name,
                    email: req.email,
                    username: req.username,
                    password: hashed_password,
                    phone_number: req.phone_number,
                    address: req.address,
                    role: req.role,
                    // Staff-entered accounts skip the email verification loop.
                    is_email_verified: true,
                },
            )
            .await
            {
                Ok(created) => HttpResponse::Ok().json(UserVisible::from(created)),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
