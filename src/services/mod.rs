pub mod appointment;
pub mod category;
pub mod financial;
pub mod medical_record;
pub mod notification;
pub mod pet;
pub mod review;
pub mod schedule;
pub mod service;
pub mod user;
pub mod verification_code;
