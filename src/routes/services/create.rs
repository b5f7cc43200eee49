use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_400, response_401, response_409, response_500},
    services::{
        category::CategoryQuery,
        service::{NewService, ServiceMutation, ServiceQuery},
    },
    startup::AppState,
    types::ServiceVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    category_id: uuid::Uuid,
    name: String,
    code: String,
    description: Option<String>,
    short_description: Option<String>,
    price: f64,
    discount_price: Option<f64>,
    duration_minutes: Option<i32>,
    requires_appointment: Option<bool>,
    is_featured: Option<bool>,
    age_group: Option<String>,
    requires_fasting: Option<bool>,
    preparation_instructions: Option<String>,
    post_care_instructions: Option<String>,
}

#[tracing::instrument(name = "Creating a service", skip(data, user, req), fields(service_code = %req.code))]
#[post("")]
pub async fn create_service(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<RequestBody>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::Admin]) {
        return forbidden;
    }

    match CategoryQuery::find_by_id(&data.conn, req.category_id).await {
        Ok(Some(_)) => (),
        Ok(None) => return response_400("Category not found."),
        Err(e) => return response_500(e),
    }
    match ServiceQuery::find_by_code(&data.conn, &req.code).await {
        Ok(Some(_)) => return response_409("A service with this code already exists."),
        Ok(None) => (),
        Err(e) => return response_500(e),
    }

    let req = req.into_inner();
    match ServiceMutation::create(
        &data.conn,
        NewService {
            category_id: req.category_id,
            name: req.name,
            code: req.code,
            description: req.description,
            short_description: req.short_description,
            price: req.price,
            discount_price: req.discount_price,
            duration_minutes: req.duration_minutes,
            requires_appointment: req.requires_appointment,
            is_featured: req.is_featured,
            age_group: req.age_group,
            requires_fasting: req.requires_fasting,
            preparation_instructions: req.preparation_instructions,
            post_care_instructions: req.post_care_instructions,
        },
    )
    .await
    {
        Ok(service) => HttpResponse::Ok().json(ServiceVisible::from(service)),
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
    use crate::test_utils::{self, factory::{self, UserFactory}};

    fn body(category_id: uuid::Uuid, code: &str) -> RequestBody {
        RequestBody {
            category_id,
            name: "Dental Cleaning".to_string(),
            code: code.to_string(),
            description: None,
            short_description: None,
            price: 120.0,
            discount_price: None,
            duration_minutes: Some(45),
            requires_appointment: None,
            is_featured: None,
            age_group: Some("Adult".to_string()),
            requires_fasting: Some(true),
            preparation_instructions: None,
            post_care_instructions: None,
        }
    }

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/services").service(create_service))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn admin_adds_a_catalog_item() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let admin = factory::user().role(UserRole::Admin).insert(&db).await?;
        let category = factory::category().insert(&db).await?;

        let req = test::TestRequest::post()
            .uri("/services")
            .set_json(body(category.id, "DENTAL"))
            .to_request();
        req.extensions_mut().insert(admin.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let returned: ServiceVisible = test::read_body_json(res).await;
        assert_eq!(returned.duration_minutes, 45);
        assert!(returned.requires_fasting);
        assert!(returned.is_active);

        Ok(())
    }

    #[actix_web::test]
    async fn conflict_on_a_duplicate_code() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let admin = factory::user().role(UserRole::Admin).insert(&db).await?;
        let category = factory::category().insert(&db).await?;
        let existing = factory::service(category.id).insert(&db).await?;

        let req = test::TestRequest::post()
            .uri("/services")
            .set_json(body(category.id, &existing.code))
            .to_request();
        req.extensions_mut().insert(admin.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::CONFLICT);

        Ok(())
    }

    #[actix_web::test]
    async fn forbidden_for_receptionists() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let receptionist = factory::user()
            .role(UserRole::Receptionist)
            .insert(&db)
            .await?;
        let category = factory::category().insert(&db).await?;

        let req = test::TestRequest::post()
            .uri("/services")
            .set_json(body(category.id, "NOPE"))
            .to_request();
        req.extensions_mut().insert(receptionist.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

        Ok(())
    }
}
