use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use chrono::NaiveDate;

use crate::{
    entities::{sea_orm_active_enums::PetGender, user as user_entity},
    routes::utils::{response_401, response_500},
    services::pet::{NewPet, PetMutation},
    startup::AppState,
    types::PetVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    name: String,
    species: String,
    breed: Option<String>,
    gender: PetGender,
    date_of_birth: Option<NaiveDate>,
    color: Option<String>,
    weight_kg: Option<f64>,
    microchip_number: Option<String>,
    notes: Option<String>,
    photo_url: Option<String>,
}

#[tracing::instrument(name = "Creating the caller's pet", skip(data, user, req), fields(pet_name = %req.name))]
#[post("/my")]
pub async fn create_my_pet(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<RequestBody>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            let req = req.into_inner();
            match PetMutation::create(
                &data.conn,
                NewPet {
                    owner_id: user.id,
                    name: req.name,
                    species: req.species,
                    breed: req.breed,
                    gender: req.gender,
                    date_of_birth: req.date_of_birth,
                    color: req.color,
                    weight_kg: req.weight_kg,
                    microchip_number: req.microchip_number,
                    notes: req.notes,
                    photo_url: req.photo_url,
                    created_by: None,
                },
            )
            .await
            {
                Ok(pet) => HttpResponse::Ok().json(PetVisible::from(pet)),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
