use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};
use chrono::Utc;

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_500},
    services::financial::FinancialQuery,
    startup::AppState,
};

/// Last 7 days of the caller's schedule, oldest first.
#[tracing::instrument(name = "Computing the veterinarian daily series", skip(data, user))]
#[get("/veterinarian/daily-appointments")]
pub async fn veterinarian_daily_appointments(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::Veterinarian]) {
        return forbidden;
    }

    match FinancialQuery::veterinarian_daily(&data.conn, user.id, Utc::now().date_naive()).await {
        Ok(series) => HttpResponse::Ok().json(series),
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
    use chrono::{Duration, Utc};
    use sea_orm::{ActiveModelTrait, DbConn, DbErr};

    use super::*;
    use crate::{
        entities::sea_orm_active_enums::AppointmentStatus,
        test_utils::{self, factory::{self, AppointmentFactory}},
        types::DailyActivity,
    };

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/financial").service(veterinarian_daily_appointments))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn series_spans_seven_days_and_counts_per_day() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let owner = factory::user().insert(&db).await?;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let pet = factory::pet(owner.id).insert(&db).await?;
        let today = Utc::now().date_naive();

        factory::appointment(pet.id, veterinarian.id)
            .on_date(today)
            .status(AppointmentStatus::Completed)
            .actual_cost(80.0)
            .insert(&db)
            .await?;
        factory::appointment(pet.id, veterinarian.id)
            .on_date(today - Duration::days(2))
            .insert(&db)
            .await?;
        // Outside the window.
        factory::appointment(pet.id, veterinarian.id)
            .on_date(today - Duration::days(10))
            .insert(&db)
            .await?;

        let req = test::TestRequest::get()
            .uri("/financial/veterinarian/daily-appointments")
            .to_request();
        req.extensions_mut().insert(veterinarian.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let body: Vec<DailyActivity> = test::read_body_json(res).await;
        assert_eq!(body.len(), 7);
        assert_eq!(body[0].date, today - Duration::days(6));
        assert_eq!(body[6].date, today);
        assert_eq!(body[6].appointments, 1);
        assert_eq!(body[6].revenue, 80.0);
        assert_eq!(body[4].appointments, 1);
        assert_eq!(body[4].revenue, 0.0);
        assert_eq!(body.iter().map(|d| d.appointments).sum::<u64>(), 2);

        Ok(())
    }
}
