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

#[tracing::instrument(name = "Computing the admin financial summary", skip(data, user))]
#[get("/admin/financial-summary")]
pub async fn admin_financial_summary(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::Admin]) {
        return forbidden;
    }

    match FinancialQuery::admin_summary(&data.conn, Utc::now().date_naive()).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
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
        test_utils::{self, factory::{self, AppointmentFactory, UserFactory}},
        types::AdminFinancialSummary,
    };

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/financial").service(admin_financial_summary))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn summary_counts_only_completed_revenue() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let admin = factory::user().role(UserRole::Admin).insert(&db).await?;
        let owner = factory::user().insert(&db).await?;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let pet = factory::pet(owner.id).insert(&db).await?;
        let category = factory::category().insert(&db).await?;
        let service = factory::service(category.id).insert(&db).await?;
        let today = Utc::now().date_naive();

        factory::appointment(pet.id, veterinarian.id)
            .on_date(today)
            .status(AppointmentStatus::Completed)
            .actual_cost(100.0)
            .service(service.id)
            .insert(&db)
            .await?;
        factory::appointment(pet.id, veterinarian.id)
            .on_date(today - Duration::days(3))
            .status(AppointmentStatus::Completed)
            .actual_cost(50.0)
            .insert(&db)
            .await?;
        // Scheduled and cancelled appointments never count as revenue.
        factory::appointment(pet.id, veterinarian.id)
            .on_date(today)
            .insert(&db)
            .await?;
        factory::appointment(pet.id, veterinarian.id)
            .on_date(today)
            .status(AppointmentStatus::Cancelled)
            .actual_cost(999.0)
            .insert(&db)
            .await?;

        let req = test::TestRequest::get()
            .uri("/financial/admin/financial-summary")
            .to_request();
        req.extensions_mut().insert(admin.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let body: AdminFinancialSummary = test::read_body_json(res).await;
        assert_eq!(body.daily_revenue, 100.0);
        assert_eq!(body.daily_appointments, 3);
        assert_eq!(body.average_appointment_cost, 75.0);
        assert_eq!(body.daily_revenue_data.len(), 60);
        assert_eq!(
            body.daily_revenue_data.last().map(|d| d.revenue),
            Some(100.0)
        );
        assert_eq!(body.revenue_by_service.len(), 1);
        assert_eq!(body.revenue_by_service[0].service_name, service.name);
        assert_eq!(body.revenue_by_service[0].revenue, 100.0);
        assert_eq!(body.top_clients.len(), 1);
        assert_eq!(body.top_clients[0].name, owner.full_name());
        assert_eq!(body.top_clients[0].total_spent, 150.0);

        Ok(())
    }

    #[actix_web::test]
    async fn forbidden_for_veterinarians() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let veterinarian = factory::veterinarian().insert(&db).await?;

        let req = test::TestRequest::get()
            .uri("/financial/admin/financial-summary")
            .to_request();
        req.extensions_mut().insert(veterinarian.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

        Ok(())
    }
}
