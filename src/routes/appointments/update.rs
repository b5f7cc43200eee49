use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use chrono::NaiveDate;

use crate::{
    entities::{
        sea_orm_active_enums::{AppointmentStatus, AppointmentType, UserRole},
        user as user_entity,
    },
    routes::utils::{
        forbid_unless, response_400, response_401, response_404, response_409, response_500,
    },
    services::{
        appointment::{AppointmentChanges, AppointmentMutation, AppointmentQuery},
        schedule,
    },
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    appointment_id: uuid::Uuid,
}

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    date: Option<NaiveDate>,
    start_time: Option<String>,
    end_time: Option<String>,
    appointment_type: Option<AppointmentType>,
    status: Option<AppointmentStatus>,
    reason: Option<String>,
    notes: Option<String>,
    estimated_cost: Option<f64>,
    actual_cost: Option<f64>,
}

#[tracing::instrument(name = "Updating an appointment", skip(data, user, path_param, req))]
#[put("/{appointment_id}")]
pub async fn update_appointment(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
    req: Json<RequestBody>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::Admin, UserRole::Veterinarian]) {
        return forbidden;
    }

    let appointment = match AppointmentQuery::find_by_id(&data.conn, path_param.appointment_id)
        .await
    {
        Ok(Some(appointment)) => appointment,
        Ok(None) => return response_404("Appointment not found."),
        Err(e) => return response_500(e),
    };

    let start_time = match &req.start_time {
        Some(raw) => match schedule::parse_time(raw) {
            Some(time) => Some(time),
            None => return response_400("Invalid time format for start_time. Use HH:MM."),
        },
        None => None,
    };
    let end_time = match &req.end_time {
        Some(raw) => match schedule::parse_time(raw) {
            Some(time) => Some(time),
            None => return response_400("Invalid time format for end_time. Use HH:MM."),
        },
        None => None,
    };

    if let Some(new_status) = req.status {
        if !schedule::can_transition(appointment.status, new_status) {
            return response_409("Illegal appointment status transition.");
        }
    }

    let req = req.into_inner();
    match AppointmentMutation::update(
        &data.conn,
        appointment,
        AppointmentChanges {
            date: req.date,
            start_time,
            end_time,
            appointment_type: req.appointment_type,
            status: req.status,
            reason: req.reason,
            notes: req.notes,
            estimated_cost: req.estimated_cost,
            actual_cost: req.actual_cost,
        },
    )
    .await
    {
        Ok(updated) => match AppointmentQuery::with_display(&data.conn, vec![updated]).await {
            Ok(mut visible) => match visible.pop() {
                Some(visible) => HttpResponse::Ok().json(visible),
                None => response_500("Updated appointment vanished."),
            },
            Err(e) => response_500(e),
        },
        Err(e) => response_500(e),
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
    use chrono::NaiveTime;
    use sea_orm::{entity::prelude::*, ActiveModelTrait, DbConn, DbErr};

    use super::*;
    use crate::{
        entities::appointment,
        test_utils::{self, factory::{self, AppointmentFactory}},
        types::AppointmentVisible,
    };

    fn empty_body() -> RequestBody {
        RequestBody {
            date: None,
            start_time: None,
            end_time: None,
            appointment_type: None,
            status: None,
            reason: None,
            notes: None,
            estimated_cost: None,
            actual_cost: None,
        }
    }

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/appointments").service(update_appointment))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn veterinarian_confirms_and_moves_an_appointment() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let owner = factory::user().insert(&db).await?;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let pet = factory::pet(owner.id).insert(&db).await?;
        let appointment = factory::appointment(pet.id, veterinarian.id).insert(&db).await?;

        let req = test::TestRequest::put()
            .uri(&format!("/appointments/{}", appointment.id))
            .set_json(RequestBody {
                status: Some(AppointmentStatus::Confirmed),
                start_time: Some("11:00".to_string()),
                end_time: Some("11:30".to_string()),
                ..empty_body()
            })
            .to_request();
        req.extensions_mut().insert(veterinarian.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let returned: AppointmentVisible = test::read_body_json(res).await;
        assert_eq!(returned.status, AppointmentStatus::Confirmed);
        assert_eq!(returned.start_time, "11:00");

        let in_db = appointment::Entity::find_by_id(appointment.id)
            .one(&db)
            .await?
            .unwrap();
        assert_eq!(in_db.status, AppointmentStatus::Confirmed);
        assert_eq!(in_db.start_time, NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert!(in_db.updated_at > appointment.updated_at);

        Ok(())
    }

    #[actix_web::test]
    async fn a_terminal_status_cannot_be_reopened() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let owner = factory::user().insert(&db).await?;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let pet = factory::pet(owner.id).insert(&db).await?;
        let appointment = factory::appointment(pet.id, veterinarian.id)
            .status(AppointmentStatus::Completed)
            .insert(&db)
            .await?;

        let req = test::TestRequest::put()
            .uri(&format!("/appointments/{}", appointment.id))
            .set_json(RequestBody {
                status: Some(AppointmentStatus::Scheduled),
                ..empty_body()
            })
            .to_request();
        req.extensions_mut().insert(veterinarian.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::CONFLICT);

        let in_db = appointment::Entity::find_by_id(appointment.id)
            .one(&db)
            .await?
            .unwrap();
        assert_eq!(in_db.status, AppointmentStatus::Completed);

        Ok(())
    }

    #[actix_web::test]
    async fn scheduled_cannot_jump_straight_to_completed() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let owner = factory::user().insert(&db).await?;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let pet = factory::pet(owner.id).insert(&db).await?;
        let appointment = factory::appointment(pet.id, veterinarian.id).insert(&db).await?;

        let req = test::TestRequest::put()
            .uri(&format!("/appointments/{}", appointment.id))
            .set_json(RequestBody {
                status: Some(AppointmentStatus::Completed),
                ..empty_body()
            })
            .to_request();
        req.extensions_mut().insert(veterinarian.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::CONFLICT);

        Ok(())
    }

    #[actix_web::test]
    async fn forbidden_for_pet_owners() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let owner = factory::user().insert(&db).await?;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let pet = factory::pet(owner.id).insert(&db).await?;
        let appointment = factory::appointment(pet.id, veterinarian.id).insert(&db).await?;

        let req = test::TestRequest::put()
            .uri(&format!("/appointments/{}", appointment.id))
            .set_json(empty_body())
            .to_request();
        req.extensions_mut().insert(owner.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

        Ok(())
    }
}
