use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use chrono::NaiveTime;

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{response_401, response_403, response_404, response_500},
    services::user::{UserMutation, UserProfileChanges, UserQuery},
    startup::AppState,
    types::UserVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: uuid::Uuid,
}

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    first_name: Option<String>,
    last_name: Option<String>,
    phone_number: Option<String>,
    address: Option<String>,
    license_number: Option<String>,
    specialization: Option<String>,
    years_of_experience: Option<i32>,
    biography: Option<String>,
    work_start_time: Option<NaiveTime>,
    work_end_time: Option<NaiveTime>,
    work_days: Option<String>,
}

#[tracing::instrument(name = "Updating a user", skip(data, user, path_param, req))]
#[put("/{user_id}")]
pub async fn update_user(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
    req: Json<RequestBody>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            if user.id != path_param.user_id && user.role != UserRole::Admin {
                return response_403();
            }
            let target = match UserQuery::find_by_id(&data.conn, path_param.user_id).await {
                Ok(Some(target)) => target,
                Ok(None) => return response_404("User not found."),
                Err(e) => return response_500(e),
            };
            let req = req.into_inner();
            match UserMutation::update_profile(
                &data.conn,
                target,
                UserProfileChanges {
                    first_name: req.first_name,
                    last_name: req.last_name,
                    phone_number: req.phone_number,
                    address: req.address,
                    license_number: req.license_number,
                    specialization: req.specialization,
                    years_of_experience: req.years_of_experience,
                    biography: req.biography,
                    work_start_time: req.work_start_time,
                    work_end_time: req.work_end_time,
                    work_days: req.work_days,
                },
            )
            .await
            {
                Ok(updated) => HttpResponse::Ok().json(UserVisible::from(updated)),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
