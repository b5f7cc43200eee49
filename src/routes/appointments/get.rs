use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::user as user_entity,
    routes::utils::{response_401, response_404, response_500},
    services::appointment::AppointmentQuery,
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    appointment_id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting an appointment", skip(data, user, path_param))]
#[get("/{appointment_id}")]
pub async fn get_appointment(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    if user.is_none() {
        return response_401();
    }

    let appointment = match AppointmentQuery::find_by_id(&data.conn, path_param.appointment_id)
        .await
    {
        Ok(Some(appointment)) => appointment,
        Ok(None) => return response_404("Appointment not found."),
        Err(e) => return response_500(e),
    };
    match AppointmentQuery::with_display(&data.conn, vec![appointment]).await {
        Ok(mut visible) => match visible.pop() {
            Some(visible) => HttpResponse::Ok().json(visible),
            None => response_404("Appointment not found."),
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
    use sea_orm::{ActiveModelTrait, DbConn, DbErr};

    use super::*;
    use crate::{
        test_utils::{self, factory},
        types::AppointmentVisible,
    };

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/appointments").service(get_appointment))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn detail_carries_all_display_names() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let owner = factory::user().insert(&db).await?;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let pet = factory::pet(owner.id).insert(&db).await?;
        let appointment = factory::appointment(pet.id, veterinarian.id).insert(&db).await?;

        let req = test::TestRequest::get()
            .uri(&format!("/appointments/{}", appointment.id))
            .to_request();
        req.extensions_mut().insert(owner.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let body: AppointmentVisible = test::read_body_json(res).await;
        assert_eq!(body.id, appointment.id);
        assert_eq!(body.pet_name, pet.name);
        assert_eq!(body.owner_name, owner.full_name());
        assert_eq!(body.veterinarian_name, veterinarian.full_name());
        assert_eq!(body.start_time, "10:00");
        assert_eq!(body.end_time, "10:30");

        Ok(())
    }

    #[actix_web::test]
    async fn not_found_for_unknown_appointment() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let owner = factory::user().insert(&db).await?;

        let req = test::TestRequest::get()
            .uri(&format!("/appointments/{}", uuid::Uuid::new_v4()))
            .to_request();
        req.extensions_mut().insert(owner.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

        Ok(())
    }
}
