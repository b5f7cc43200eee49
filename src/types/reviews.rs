use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ReviewVisible {
    pub id: uuid::Uuid,
    pub veterinarian_id: uuid::Uuid,
    pub rating: i16,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub pet_name: Option<String>,
    pub pet_species: Option<String>,
    pub is_verified_visit: bool,
    pub is_approved: bool,
    pub veterinarian_name: String,
    /// Reviewer identity is not exposed to clients.
    pub user_name: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}
