use actix_web::{
    patch,
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

#[tracing::instrument(name = "Approving a review", skip(data, user, path_param))]
#[patch("/{review_id}/approve")]
pub async fn approve_review(
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
    match ReviewMutation::approve(&data.conn, review).await {
        Ok(_) => HttpResponse::NoContent().into(),
        Err(e) => response_500(e),
    }
}
