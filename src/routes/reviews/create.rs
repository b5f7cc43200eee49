use actix_web::{
    post,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use chrono::Utc;

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_400, response_401, response_404, response_500},
    services::{
        appointment::AppointmentQuery,
        review::{NewReview, ReviewMutation, ReviewQuery},
        user::UserQuery,
    },
    startup::AppState,
    types::ReviewVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    veterinarian_id: uuid::Uuid,
}

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    rating: i16,
    title: Option<String>,
    comment: Option<String>,
    pet_name: Option<String>,
    pet_species: Option<String>,
}

#[tracing::instrument(name = "Creating a veterinarian review", skip(data, user, path_param, req))]
#[post("/veterinarian/{veterinarian_id}")]
pub async fn create_review(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
    req: Json<RequestBody>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::PetOwner]) {
        return forbidden;
    }
    if !(1..=5).contains(&req.rating) {
        return response_400("The rating must be between 1 and 5.");
    }

    let veterinarian =
        match UserQuery::find_veterinarian(&data.conn, path_param.veterinarian_id).await {
            Ok(Some(veterinarian)) => veterinarian,
            Ok(None) => return response_404("Veterinarian not found."),
            Err(e) => return response_500(e),
        };

    match AppointmentQuery::owner_visited_veterinarian(
        &data.conn,
        user.id,
        veterinarian.id,
        Utc::now().date_naive(),
    )
    .await
    {
        Ok(true) => (),
        Ok(false) => {
            return response_400("You can only review a veterinarian you have visited.")
        }
        Err(e) => return response_500(e),
    }

    match ReviewQuery::exists_for(&data.conn, veterinarian.id, user.id).await {
        Ok(false) => (),
        Ok(true) => return response_400("You have already reviewed this veterinarian."),
        Err(e) => return response_500(e),
    }

    let req = req.into_inner();
    let review = match ReviewMutation::create(
        &data.conn,
        NewReview {
            veterinarian_id: veterinarian.id,
            user_id: user.id,
            rating: req.rating,
            title: req.title,
            comment: req.comment,
            pet_name: req.pet_name,
            pet_species: req.pet_species,
        },
    )
    .await
    {
        Ok(review) => review,
        Err(e) => return response_500(e),
    };

    match ReviewQuery::with_names(&data.conn, vec![review]).await {
        Ok(mut visible) => match visible.pop() {
            Some(visible) => HttpResponse::Ok().json(visible),
            None => response_500("Created review vanished."),
        },
        Err(e) => response_500(e),
    }
}
