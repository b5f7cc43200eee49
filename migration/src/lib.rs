pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_users_table;
mod m20250901_000002_create_categories_table;
mod m20250901_000003_create_services_table;
mod m20250901_000004_create_pets_table;
mod m20250901_000005_create_appointments_table;
mod m20250901_000006_create_medical_records_table;
mod m20250901_000007_create_reviews_table;
mod m20250901_000008_create_two_factor_codes_table;
mod m20250901_000009_create_email_verification_codes_table;
mod m20250901_000010_create_notifications_table;
mod m_seed_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_users_table::Migration),
            Box::new(m20250901_000002_create_categories_table::Migration),
            Box::new(m20250901_000003_create_services_table::Migration),
            Box::new(m20250901_000004_create_pets_table::Migration),
            Box::new(m20250901_000005_create_appointments_table::Migration),
            Box::new(m20250901_000006_create_medical_records_table::Migration),
            Box::new(m20250901_000007_create_reviews_table::Migration),
            Box::new(m20250901_000008_create_two_factor_codes_table::Migration),
            Box::new(m20250901_000009_create_email_verification_codes_table::Migration),
            Box::new(m20250901_000010_create_notifications_table::Migration),
            Box::new(m_seed_data::Migration),
        ]
    }
}
