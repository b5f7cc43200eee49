use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use chrono::NaiveDate;

use crate::{
    entities::{sea_orm_active_enums::PetGender, user as user_entity},
    routes::utils::{response_401, response_403, response_404, response_500},
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
    notes: Option<String>,
    photo_url: Option<String>,
}

#[tracing::instrument(name = "Updating the caller's pet", skip(data, user, path_param, req))]
#[put("/my/{pet_id}")]
pub async fn update_my_pet(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
    req: Json<RequestBody>,
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
                    status: None,
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
