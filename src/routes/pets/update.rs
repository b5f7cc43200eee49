use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use chrono::NaiveDate;

use crate::{
    entities::{
        sea_orm_active_enums::{PetGender, PetStatus, UserRole},
        user as user_entity,
    },
    routes::utils::{forbid_unless, response_401, response_404, response_500},
    services::pet::{PetChanges, PetMutation, PetQuery},
    startup::AppState,
    types::PetVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    pet_id: uuid::Uuid,
}

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    name: Option<String>,
    species: Option<String>,
    breed: Option<String>,
    gender: Option<PetGender>,
    date_of_birth: Option<NaiveDate>,
    color: Option<String>,
    weight_kg: Option<f64>,
    microchip_number: Option<String>,
    status: Option<PetStatus>,
    notes: Option<String>,
    photo_url: Option<String>,
}

#[tracing::instrument(name = "Updating a pet", skip(data, user, path_param, req))]
#[put("/{pet_id}")]
pub async fn update_pet(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
    req: Json<RequestBody>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            if let Some(forbidden) =
                forbid_unless(&user, &[UserRole::Admin, UserRole::Veterinarian])
            {
                return forbidden;
            }
            let pet = match PetQuery::find_by_id(&data.conn, path_param.pet_id).await {
                Ok(Some(pet)) => pet,
                Ok(None) => return response_404("Pet not found."),
                Err(e) => return response_500(e),
            };
            let req = req.into_inner();
            match PetMutation::update(
                &data.conn,
                pet,
                PetChanges {
                    name: req.name,
                    species: req.species,
                    breed: req.breed,
                    gender: req.gender,
                    date_of_birth: req.date_of_birth,
                    color: req.color,
                    weight_kg: req.weight_kg,
                    microchip_number: req.microchip_number,
                    status: req.status,
                    notes: req.notes,
                    photo_url: req.photo_url,
                },
            )
            .await
            {
                Ok(updated) => HttpResponse::Ok().json(PetVisible::from(updated)),
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
    use sea_orm::{entity::prelude::*, ActiveModelTrait, DbConn, DbErr};

    use super::*;
    use crate::{
        entities::pet,
        test_utils::{self, factory},
    };

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/pets").service(update_pet))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn veterinarian_updates_weight_and_status() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let veterinarian = factory::veterinarian().insert(&db).await?;
        let owner = factory::user().insert(&db).await?;
        let pet = factory::pet(owner.id).insert(&db).await?;

        let req = test::TestRequest::put()
            .uri(&format!("/pets/{}", pet.id))
            .set_json(RequestBody {
                name: None,
                species: None,
                breed: None,
                gender: None,
                date_of_birth: None,
                color: None,
                weight_kg: Some(12.5),
                microchip_number: None,
                status: Some(PetStatus::Deceased),
                notes: None,
                photo_url: None,
            })
            .to_request();
        req.extensions_mut().insert(veterinarian.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let pet_in_db = pet::Entity::find_by_id(pet.id).one(&db).await?.unwrap();
        assert_eq!(pet_in_db.weight_kg, Some(12.5));
        assert_eq!(pet_in_db.status, PetStatus::Deceased);

        Ok(())
    }

    #[actix_web::test]
    async fn forbidden_for_pet_owners() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let owner = factory::user().insert(&db).await?;
        let pet = factory::pet(owner.id).insert(&db).await?;

        let req = test::TestRequest::put()
            .uri(&format!("/pets/{}", pet.id))
            .set_json(RequestBody {
                name: Some("Renamed".to_string()),
                species: None,
                breed: None,
                gender: None,
                date_of_birth: None,
                color: None,
                weight_kg: None,
                microchip_number: None,
                status: None,
                notes: None,
                photo_url: None,
            })
            .to_request();
        req.extensions_mut().insert(owner.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

        Ok(())
    }
}
