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

/// Includes inactive and deceased pets; staff-only history view.
#[tracing::instrument(name = "Listing all pets", skip(data, user))]
#[get("/all")]
pub async fn list_all_pets(
    data: Data<AppState>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            if let Some(forbidden) =
                forbid_unless(&user, &[UserRole::Admin, UserRole::Veterinarian])
            {
                return forbidden;
            }
            match PetQuery::find_all_with_owner(&data.conn, false).await {
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
