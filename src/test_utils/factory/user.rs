use chrono::Utc;
use sea_orm::Set;

use crate::entities::{sea_orm_active_enums::UserRole, user};

/// Password is "password".
const PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$r07vWFCaKrbNPrSgUrG/+Q$/2lBaeRWeox6ROMu6qAwOYmttdGXA3o4Uw2YHC/fvfY";

pub fn user() -> user::ActiveModel {
    let now = Utc::now();
    let unique = uuid::Uuid::new_v4();
    user::ActiveModel {
        id: Set(unique),
        first_name: Set("Maja".to_string()),
        last_name: Set("Novak".to_string()),
        email: Set(format!("{}@test.com", unique)),
        username: Set(format!("user-{}", unique)),
        password: Set(PASSWORD_HASH.to_string()),
        phone_number: Set(None),
        address: Set(None),
        role: Set(UserRole::PetOwner),
        is_active: Set(true),
        is_email_verified: Set(true),
        last_login_at: Set(None),
        license_number: Set(None),
        specialization: Set(None),
        years_of_experience: Set(None),
        biography: Set(None),
        work_start_time: Set(None),
        work_end_time: Set(None),
        work_days: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub fn veterinarian() -> user::ActiveModel {
    user().role(UserRole::Veterinarian)
}

pub trait UserFactory {
    fn role(self, role: UserRole) -> user::ActiveModel;
    fn is_active(self, is_active: bool) -> user::ActiveModel;
    fn email_verified(self, is_email_verified: bool) -> user::ActiveModel;
    fn work_hours(self, start: chrono::NaiveTime, end: chrono::NaiveTime) -> user::ActiveModel;
}

impl UserFactory for user::ActiveModel {
    fn role(mut self, role: UserRole) -> user::ActiveModel {
        self.role = Set(role);
        self
    }

    fn is_active(mut self, is_active: bool) -> user::ActiveModel {
        self.is_active = Set(is_active);
        self
    }

    fn email_verified(mut self, is_email_verified: bool) -> user::ActiveModel {
        self.is_email_verified = Set(is_email_verified);
        self
    }

    fn work_hours(
        mut self,
        start: chrono::NaiveTime,
        end: chrono::NaiveTime,
    ) -> user::ActiveModel {
        self.work_start_time = Set(Some(start));
        self.work_end_time = Set(Some(end));
        self
    }
}
