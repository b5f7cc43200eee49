pub mod appointment;
pub mod category;
pub mod email_verification_code;
pub mod medical_record;
pub mod notification;
pub mod pet;
pub mod review;
pub mod sea_orm_active_enums;
pub mod service;
pub mod two_factor_code;
pub mod user;
