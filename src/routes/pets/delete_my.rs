use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};

use crate::{
    entities::user as user_entity,
    routes::utils::{response_401, response_403, response_404, response_500},
    services::pet::{PetMutation, PetQuery},
    startup::AppState,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    pet_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting the caller's pet", skip(data, user, path_param))]
#[delete("/my/{pet_id}")]
pub async fn delete_my_pet(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            let pet = match PetQuery::find_by_id(&data.conn, path_param.pet_id).await {
                Ok(Some(pet)) => pet,
                Ok(None) => return response_404("Pet not found."),
                Err(e) => return response_500(e),
            };
            if pet.owner_id != user.id {
                return response_403();
            }
            match PetMutation::deactivate(&data.conn, pet).await {
                Ok(_) => HttpResponse::NoContent().into(),
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
        entities::{pet, sea_orm_active_enums::PetStatus},
        test_utils::{self, factory},
    };

    async fn init_app(
        db: DbConn,
    ) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
        test::init_service(
            App::new()
                .service(scope("/pets").service(delete_my_pet))
                .app_data(Data::new(test_utils::app_state(db))),
        )
        .await
    }

    #[actix_web::test]
    async fn owner_deactivates_their_pet() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let owner = factory::user().insert(&db).await?;
        let pet = factory::pet(owner.id).insert(&db).await?;

        let req = test::TestRequest::delete()
            .uri(&format!("/pets/my/{}", pet.id))
            .to_request();
        req.extensions_mut().insert(owner.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::NO_CONTENT);

        let pet_in_db = pet::Entity::find_by_id(pet.id).one(&db).await?.unwrap();
        assert_eq!(pet_in_db.status, PetStatus::Inactive);

        Ok(())
    }

    #[actix_web::test]
    async fn forbidden_for_a_foreign_pet() -> Result<(), DbErr> {
        let db = test_utils::init_db().await?;
        let app = init_app(db.clone()).await;
        let owner = factory::user().insert(&db).await?;
        let other = factory::user().insert(&db).await?;
        let pet = factory::pet(other.id).insert(&db).await?;

        let req = test::TestRequest::delete()
            .uri(&format!("/pets/my/{}", pet.id))
            .to_request();
        req.extensions_mut().insert(owner.clone());

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

        Ok(())
    }
}
