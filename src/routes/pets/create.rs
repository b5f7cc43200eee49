use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use chrono::NaiveDate;

use crate::{
    entities::{
        sea_orm_active_enums::{PetGender, UserRole},
        user as user_entity,
    },
    routes::utils::{forbid_unless, response_400, response_401, response_500},
    services::{
        pet::{NewPet, PetMutation},
        user::UserQuery,
    },
    startup::AppState,
    types::PetVisible,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct RequestBody {
    owner_id: uuid::Uuid,
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

#[tracing::instrument(name = "Creating a pet", skip(data, user, req), fields(pet_name = %req.name))]
#[post("")]
pub async fn create_pet(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<RequestBody>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            if let Some(forbidden) = forbid_unless(
                &user,
                &[
                    UserRole::Admin,
                    UserRole::Veterinarian,
                    UserRole::Receptionist,
                ],
            ) {
                return forbidden;
            }
            match UserQuery::find_by_id(&data.conn, req.owner_id).await {
                Ok(Some(_)) => (),
                Ok(None) => return response_400("Pet owner not found."),
                Err(e) => return response_500(e),
            }
            let req = req.into_inner();
            match PetMutation::create(
                &data.conn,
                NewPet {
                    owner_id: req.owner_id,
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
                    created_by: Some(user.id),
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
