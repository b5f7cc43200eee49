use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm_migration::prelude::*;
use uuid::Uuid;

use crate::{
    m20250901_000001_create_users_table::User,
    m20250901_000002_create_categories_table::Category,
    m20250901_000003_create_services_table::Service,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut stmts: Vec<InsertStatement> = vec![];

        let admin_id = Uuid::new_v4();
        stmts.push(
            Query::insert()
                .into_table(User::Table)
                .columns([
                    User::Id,
                    User::FirstName,
                    User::LastName,
                    User::Email,
                    User::Username,
                    User::Password,
                    User::Role,
                    User::IsActive,
                    User::IsEmailVerified,
                ])
                .values_panic([
                    admin_id.into(),
                    "Clinic".into(),
                    "Admin".into(),
                    "admin@fourpaw.clinic".into(),
                    "admin".into(),
                    hash("admin".as_bytes()).into(),
                    "Admin".into(),
                    true.into(),
                    true.into(),
                ])
                .to_owned(),
        );

        let medical_category_id = Uuid::new_v4();
        stmts.push(
            Query::insert()
                .into_table(Category::Table)
                .columns([
                    Category::Id,
                    Category::Name,
                    Category::CategoryType,
                    Category::TargetSpecies,
                    Category::SortOrder,
                ])
                .values_panic([
                    medical_category_id.into(),
                    "General Care".into(),
                    "Medical".into(),
                    "All".into(),
                    1.into(),
                ])
                .to_owned(),
        );
        let grooming_category_id = Uuid::new_v4();
        stmts.push(
            Query::insert()
                .into_table(Category::Table)
                .columns([
                    Category::Id,
                    Category::Name,
                    Category::CategoryType,
                    Category::TargetSpecies,
                    Category::SortOrder,
                ])
                .values_panic([
                    grooming_category_id.into(),
                    "Grooming".into(),
                    "Grooming".into(),
                    "Dogs,Cats".into(),
                    2.into(),
                ])
                .to_owned(),
        );

        stmts.push(
            Query::insert()
                .into_table(Service::Table)
                .columns([
                    Service::Id,
                    Service::CategoryId,
                    Service::Name,
                    Service::Code,
                    Service::Price,
                    Service::DurationMinutes,
                ])
                .values_panic([
                    Uuid::new_v4().into(),
                    medical_category_id.into(),
                    "Full Wellness Exam".into(),
                    "WELLNESS".into(),
                    80.0.into(),
                    30.into(),
                ])
                .to_owned(),
        );
        stmts.push(
            Query::insert()
                .into_table(Service::Table)
                .columns([
                    Service::Id,
                    Service::CategoryId,
                    Service::Name,
                    Service::Code,
                    Service::Price,
                    Service::DurationMinutes,
                ])
                .values_panic([
                    Uuid::new_v4().into(),
                    grooming_category_id.into(),
                    "Basic Grooming".into(),
                    "GROOM-BASIC".into(),
                    45.0.into(),
                    60.into(),
                ])
                .to_owned(),
        );

        for stmt in stmts {
            manager.exec_stmt(stmt).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(User::Table)
                    .cond_where(Expr::col(User::Email).eq("admin@fourpaw.clinic"))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Service::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Category::Table).to_owned())
            .await?;
        Ok(())
    }
}

fn hash(password: &[u8]) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password, &salt)
        .expect("Unable to hash seed password.")
        .to_string()
}
