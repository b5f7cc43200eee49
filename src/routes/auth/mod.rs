mod change_password;
mod login;
mod login_two_factor;
mod me;
mod register;
mod resend_two_factor;
mod resend_verification;
mod validate;
mod verify_email;
mod verify_two_factor;

use actix_web::web::{scope, ServiceConfig};
use login::login_user;
use me::get_me;
use register::register_user;
use validate::validate_token;

pub fn auth_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/auth")
            .service(register_user)
            .service(login_user)
            .service(login_two_factor::login_two_factor)
            .service(verify_two_factor::verify_two_factor)
            .service(resend_two_factor::resend_two_factor)
            .service(verify_email::verify_email)
            .service(resend_verification::resend_verification)
            .service(change_password::change_password)
            .service(get_me)
            .service(validate_token),
    );
}
