use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};

use crate::{
    entities::sea_orm_active_enums::UserRole,
    notifications::Outbound,
    routes::utils::{response_409, response_500},
    services::{
        user::{NewUser, UserMutation, UserQuery},
        verification_code::EmailVerificationCodes,
    },
    startup::AppState,
    types::SuccessResponse,
    utils::{auth::password, emails},
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
    role: Option<UserRole>,
}

#[tracing::instrument(name = "Registering a new user",
skip(data, new_user),
fields(
    new_user_email = %new_user.email,
    new_user_username = %new_user.username,
))]
#[post("/register")]
pub async fn register_user(
    data: Data<AppState>,
    new_user: Json<RequestBody>,
) -> HttpResponse {
    let settings = crate::settings::get_settings().expect("Failed to read settings.");

    match UserQuery::find_by_email(&data.conn, &new_user.email).await {
        Ok(Some(_)) => return response_409("A user with this email already exists."),
        Ok(None) => (),
        Err(e) => return response_500(e),
    }
    match UserQuery::find_by_username(&data.conn, &new_user.username).await {
        Ok(Some(_)) => return response_409("This username is already taken."),
        Ok(None) => (),
        Err(e) => return response_500(e),
    }

    let hashed_password = password::hash(new_user.password.as_bytes()).await;
    let new_user = new_user.into_inner();
    let user = match UserMutation::create_user(
        &data.conn,
        NewUser {
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            username: new_user.username,
            password: hashed_password,
            phone_number: new_user.phone_number,
            address: new_user.address,
            role: new_user.role.unwrap_or(UserRole::PetOwner),
            is_email_verified: false,
        },
    )
    .await
    {
        Ok(user) => user,
        Err(e) => return response_500(e),
    };

    let code = match EmailVerificationCodes::issue(
        &data.conn,
        user.id,
        settings.verification.email_code_expiration_minutes,
    )
    .await
    {
        Ok(code) => code,
        Err(e) => return response_500(e),
    };

    // Delivery is best-effort; registration has already succeeded.
    if let Err(e) = emails::send_code_email(
        "4Paw Veterinary Clinic - Verify your email".to_string(),
        user.email.clone(),
        user.first_name.clone(),
        user.last_name.clone(),
        "verification_code_email.html",
        code.code.clone(),
        settings.verification.email_code_expiration_minutes,
    )
    .await
    {
        tracing::event!(target: "backend", tracing::Level::WARN, "Verification email failed: {}", e);
    }

    let admin_emails = UserQuery::admin_emails(&data.conn).await.unwrap_or_default();
    data.notifier.publish(Outbound::UserRegistration {
        user_id: user.id,
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        email: user.email.clone(),
        admin_emails,
    });

    tracing::event!(target: "backend", tracing::Level::INFO, "User created successfully.");
    HttpResponse::Ok().json(SuccessResponse {
        message: "Your account was created successfully. Check your email for the verification code to activate your account.".to_string(),
    })
}
