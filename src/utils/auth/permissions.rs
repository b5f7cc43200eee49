use crate::entities::sea_orm_active_enums::UserRole;

/// Static permission-string list carried inside the access token.
pub fn role_permissions(role: &UserRole) -> Vec<&'static str> {
    match role {
        UserRole::Admin => vec![
            "users.create",
            "users.read",
            "users.update",
            "users.delete",
            "pets.create",
            "pets.read",
            "pets.update",
            "pets.delete",
            "appointments.create",
            "appointments.read",
            "appointments.update",
            "appointments.delete",
            "services.create",
            "services.read",
            "services.update",
            "services.delete",
            "categories.create",
            "categories.read",
            "categories.update",
            "categories.delete",
            "medical-records.read",
            "reviews.moderate",
            "reports.read",
            "settings.update",
            "system.admin",
        ],
        UserRole::Veterinarian => vec![
            "pets.read",
            "pets.update",
            "appointments.read",
            "appointments.update",
            "medical-records.create",
            "medical-records.read",
            "medical-records.update",
            "services.read",
            "users.read",
        ],
        UserRole::VetTechnician => vec![
            "pets.read",
            "pets.update",
            "appointments.read",
            "appointments.update",
            "medical-records.read",
            "services.read",
        ],
        UserRole::Receptionist => vec![
            "appointments.create",
            "appointments.read",
            "appointments.update",
            "users.create",
            "users.read",
            "users.update",
            "pets.create",
            "pets.read",
            "pets.update",
            "services.read",
        ],
        UserRole::PetOwner => vec![
            "pets.read",
            "appointments.create",
            "appointments.read",
            "services.read",
            "reviews.create",
            "profile.update",
        ],
    }
}
