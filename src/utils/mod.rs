pub mod auth;
pub mod emails;
