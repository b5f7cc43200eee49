pub mod auth_middleware;
pub mod jwt;
pub mod password;
pub mod permissions;
