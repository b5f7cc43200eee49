use serde::{Deserialize, Serialize};

pub static INTERNAL_SERVER_ERROR_MESSAGE: &str =
    "Something unexpected happened. Kindly try again.";

#[derive(Serialize, Deserialize)]
pub struct SuccessResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
