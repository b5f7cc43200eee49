use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web::Data,
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;

use crate::{services::user::UserQuery, startup::AppState, utils::auth::jwt};

pub struct AuthenticateUser;

impl<S: 'static, B> Transform<S, ServiceRequest> for AuthenticateUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateUserMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticateUserMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateUserMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    // A missing or bad token only means no user model lands in the request
    // extensions; handlers decide whether that is a 401.
    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        Box::pin(async move {
            let token = bearer_token(&req);
            if let Some(token) = token {
                match jwt::decode_access_token(&token) {
                    Ok(claims) => {
                        if let Some(data) = req.app_data::<Data<AppState>>() {
                            match UserQuery::find_active_by_id(&data.conn, claims.sub).await {
                                Ok(Some(user)) => {
                                    req.extensions_mut().insert(user);
                                    req.extensions_mut().insert(claims);
                                }
                                Ok(None) => (),
                                Err(e) => {
                                    tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to load token user: {:#?}", e);
                                }
                            }
                        }
                    }
                    Err(e) => {
                        tracing::event!(target: "backend", tracing::Level::DEBUG, "Rejected access token: {}", e);
                    }
                }
            }

            let res = svc.call(req).await?;

            Ok(res)
        })
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned)
}
