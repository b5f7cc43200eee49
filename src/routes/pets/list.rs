use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};

use crate::{
    entities::{sea_orm_active_enums::UserRole, user as user_entity},
    routes::utils::{forbid_unless, response_401, response_500},
    services::pet::PetQuery,
    startup::AppState,
    types::{PetVisible, PetWithOwner},
};

#[tracing::instrument(name = "Listing active pets", skip(data, user))]
#[get("")]
pub async fn list_pets(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            if let Some(forbidden) = forbid_unless(
                &user,
                &[
                    UserRole::Admin,
                    UserRole::Veterinarian,
                    UserRole::VetTechnician,
                    UserRole::Receptionist,
                ],
            ) {
                return forbidden;
            }
            match PetQuery::find_all_with_owner(&data.conn, true).await {
                Ok(pets) => HttpResponse::Ok().json(
                    pets.into_iter()
                        .map(|(pet, owner)| PetWithOwner {
                            pet: PetVisible::from(pet),
                            owner_name: owner.map(|o| o.full_name()).unwrap_or_default(),
                        })
                        .collect::<Vec<_>>(),
                ),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
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
        entities::sea_orm_active_enums::PetStatus,
        test_utils::{self, factory::{self, PetFactory, UserFactory}},
    };

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/pets").service(list_pets))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn staff_see_active_pets_with_owner_names() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let receptionist = factory::user()
            .role(UserRole::Receptionist)
            .insert(&db)
            .await?;
        let owner = factory::user().insert(&db).await?;
        let active = factory::pet(owner.id).insert(&db).await?;
        factory::pet(owner.id)
            .status(PetStatus::Inactive)
            .insert(&db)
            .await?;

        let req = test::TestRequest::get().uri("/pets").to_request();
        req.extensions_mut().insert(receptionist.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let body: Vec<PetWithOwner> = test::read_body_json(res).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].pet.id, active.id);
        assert_eq!(body[0].owner_name, owner.full_name());

        Ok(())
    }

    #[actix_web::test]
    async fn forbidden_for_pet_owners() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let owner = factory::user().insert(&db).await?;

        let req = test::TestRequest::get().uri("/pets").to_request();
        req.extensions_mut().insert(owner.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

        Ok(())
    }
}
