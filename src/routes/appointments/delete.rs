use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_404, response_500},
    services::appointment::{AppointmentMutation, AppointmentQuery},
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    appointment_id: uuid::Uuid,
}

/// Rows are never removed; deleting tombstones the appointment as Cancelled
/// so the financial history stays intact.
#[tracing::instrument(name = "Deleting an appointment", skip(data, user, path_param))]
#[delete("/{appointment_id}")]
pub async fn delete_appointment(
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

    let appointment = match AppointmentQuery::find_by_id(&data.conn, path_param.appointment_id)
        .await
    {
        Ok(Some(appointment)) => appointment,
        Ok(None) => return response_404("Appointment not found."),
        Err(e) => return response_500(e),
    };
    match AppointmentMutation::cancel(&data.conn, appointment).await {
        Ok(_) => HttpResponse::NoContent().into(),
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
    use sea_orm::{entity::prelude::*, ActiveModelTrait, DbConn, DbErr};

    use super::*;
    use crate::{
        entities::{appointment, sea_orm_active_enums::AppointmentStatus},
        test_utils::{self, factory::{self, UserFactory}},
    };

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/appointments").service(delete_appointment))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn delete_tombstones_instead_of_removing() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let admin = factory::user().role(UserRole::Admin).insert(&db).await?;
        let owner = factory::user().insert(&db).await?;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let pet = factory::pet(owner.id).insert(&db).await?;
        let appointment = factory::appointment(pet.id, veterinarian.id).insert(&db).await?;

        let req = test::TestRequest::delete()
            .uri(&format!("/appointments/{}", appointment.id))
            .to_request();
        req.extensions_mut().insert(admin.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::NO_CONTENT);

        let in_db = appointment::Entity::find_by_id(appointment.id)
            .one(&db)
            .await?
            .unwrap();
        assert_eq!(in_db.status, AppointmentStatus::Cancelled);

        Ok(())
    }

    #[actix_web::test]
    async fn forbidden_for_veterinarians() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let owner = factory::user().insert(&db).await?;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let pet = factory::pet(owner.id).insert(&db).await?;
        let appointment = factory::appointment(pet.id, veterinarian.id).insert(&db).await?;

        let req = test::TestRequest::delete()
            .uri(&format!("/appointments/{}", appointment.id))
            .to_request();
        req.extensions_mut().insert(veterinarian.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

        Ok(())
    }
}
