use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_404, response_500},
    services::service::{ServiceChanges, ServiceMutation, ServiceQuery},
    startup::AppState,
    types::ServiceVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    service_id: uuid::Uuid,
}

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    category_id: Option<uuid::Uuid>,
    name: Option<String>,
    description: Option<String>,
    short_description: Option<String>,
    price: Option<f64>,
    discount_price: Option<f64>,
    duration_minutes: Option<i32>,
    requires_appointment: Option<bool>,
    is_active: Option<bool>,
    is_featured: Option<bool>,
    age_group: Option<String>,
    requires_fasting: Option<bool>,
    preparation_instructions: Option<String>,
    post_care_instructions: Option<String>,
}

#[tracing::instrument(name = "Updating a service", skip(data, user, path_param, req))]
#[put("/{service_id}")]
pub async fn update_service(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
    req: Json<RequestBody>,
) -> HttpResponse {
    let user = match user {
        Some(user) => user.into_inner(),
        None => return response_401(),
    };
    if let Some(forbidden) = forbid_unless(&user, &[UserRole::Admin]) {
        return forbidden;
    }

    let service = match ServiceQuery::find_by_id(&data.conn, path_param.service_id).await {
        Ok(Some(service)) => service,
        Ok(None) => return response_404("Service not found."),
        Err(e) => return response_500(e),
    };
    let req = req.into_inner();
    match ServiceMutation::update(
        &data.conn,
        service,
        ServiceChanges {
            category_id: req.category_id,
            name: req.name,
            description: req.description,
            short_description: req.short_description,
            price: req.price,
            discount_price: req.discount_price,
            duration_minutes: req.duration_minutes,
            requires_appointment: req.requires_appointment,
            is_active: req.is_active,
            is_featured: req.is_featured,
            age_group: req.age_group,
            requires_fasting: req.requires_fasting,
            preparation_instructions: req.preparation_instructions,
            post_care_instructions: req.post_care_instructions,
        },
    )
    .await
    {
        Ok(updated) => HttpResponse::Ok().json(ServiceVisible::from(updated)),
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
        entities::service,
        test_utils::{self, factory::{self, UserFactory}},
    };

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/services").service(update_service))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn admin_reprices_a_service() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let admin = factory::user().role(UserRole::Admin).insert(&db).await?;
        let category = factory::category().insert(&db).await?;
        let existing = factory::service(category.id).insert(&db).await?;

        let req = test::TestRequest::put()
            .uri(&format!("/services/{}", existing.id))
            .set_json(RequestBody {
                category_id: None,
                name: None,
                description: None,
                short_description: None,
                price: Some(95.0),
                discount_price: Some(85.0),
                duration_minutes: None,
                requires_appointment: None,
                is_active: None,
                is_featured: Some(true),
                age_group: None,
                requires_fasting: None,
                preparation_instructions: None,
                post_care_instructions: None,
            })
            .to_request();
        req.extensions_mut().insert(admin.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let in_db = service::Entity::find_by_id(existing.id).one(&db).await?.unwrap();
        assert_eq!(in_db.price, 95.0);
        assert_eq!(in_db.discount_price, Some(85.0));
        assert!(in_db.is_featured);

        Ok(())
    }
}
