use argon2::password_hash::rand_core::{OsRng, RngCore};
use chrono::{Duration, Utc};
use sea_orm::{entity::prelude::*, sea_query::Expr, QueryOrder, Set};

use crate::entities::{email_verification_code, two_factor_code};

/// 6-digit numeric code, zero-padding never needed.
pub fn generate_code() -> String {
    (100_000 + OsRng.next_u32() % 900_000).to_string()
}

#[derive(Debug, PartialEq, Eq)]
pub enum CodeCheck {
    Valid,
    InvalidOrExpired,
}

pub struct TwoFactorCodes;

impl TwoFactorCodes {
    /// Replaces any previous codes; a user has at most one outstanding code.
    pub async fn issue(
        db: &DbConn,
        user_id: Uuid,
        client_type: Option<String>,
        ttl_minutes: i64,
    ) -> Result<two_factor_code::Model, DbErr> {
        two_factor_code::Entity::delete_many()
            .filter(two_factor_code::Column::UserId.eq(user_id))
            .exec(db)
            .await?;

        let now = Utc::now();
        two_factor_code::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            code: Set(generate_code()),
            client_type: Set(client_type),
            failed_attempts: Set(0),
            is_used: Set(false),
            used_at: Set(None),
            expires_at: Set((now + Duration::minutes(ttl_minutes)).into()),
            created_at: Set(now.into()),
        }
        .insert(db)
        .await
    }

    pub async fn verify(db: &DbConn, user_id: Uuid, code: &str) -> Result<CodeCheck, DbErr> {
        let now = Utc::now();
        let matching = two_factor_code::Entity::find()
            .filter(two_factor_code::Column::UserId.eq(user_id))
            .filter(two_factor_code::Column::Code.eq(code))
            .filter(two_factor_code::Column::IsUsed.eq(false))
            .filter(two_factor_code::Column::ExpiresAt.gt(now))
            .one(db)
            .await?;

        match matching {
            Some(found) => {
                let mut found: two_factor_code::ActiveModel = found.into();
                found.is_used = Set(true);
                found.used_at = Set(Some(now.into()));
                found.update(db).await?;
                Ok(CodeCheck::Valid)
            }
            None => {
                two_factor_code::Entity::update_many()
                    .col_expr(
                        two_factor_code::Column::FailedAttempts,
                        Expr::col(two_factor_code::Column::FailedAttempts).add(1),
                    )
                    .filter(two_factor_code::Column::UserId.eq(user_id))
                    .filter(two_factor_code::Column::IsUsed.eq(false))
                    .exec(db)
                    .await?;
                Ok(CodeCheck::InvalidOrExpired)
            }
        }
    }

    /// Remaining cooldown in seconds when a code was issued too recently.
    pub async fn cooldown_remaining(
        db: &DbConn,
        user_id: Uuid,
        cooldown_minutes: i64,
    ) -> Result<Option<i64>, DbErr> {
        let threshold = Utc::now() - Duration::minutes(cooldown_minutes);
        let recent = two_factor_code::Entity::find()
            .filter(two_factor_code::Column::UserId.eq(user_id))
            .filter(two_factor_code::Column::CreatedAt.gt(threshold))
            .order_by_desc(two_factor_code::Column::CreatedAt)
            .one(db)
            .await?;
        Ok(recent.map(|code| {
            (code.created_at.with_timezone(&Utc) + Duration::minutes(cooldown_minutes)
                - Utc::now())
            .num_seconds()
        }))
    }
}

pub struct EmailVerificationCodes;

impl EmailVerificationCodes {
    pub async fn issue(
        db: &DbConn,
        user_id: Uuid,
        ttl_minutes: i64,
    ) -> Result<email_verification_code::Model, DbErr> {
        email_verification_code::Entity::delete_many()
            .filter(email_verification_code::Column::UserId.eq(user_id))
            .filter(email_verification_code::Column::IsUsed.eq(false))
            .exec(db)
            .await?;

        let now = Utc::now();
        email_verification_code::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            code: Set(generate_code()),
            failed_attempts: Set(0),
            is_used: Set(false),
            used_at: Set(None),
            expires_at: Set((now + Duration::minutes(ttl_minutes)).into()),
            created_at: Set(now.into()),
        }
        .insert(db)
        .await
    }

    pub async fn verify(db: &DbConn, user_id: Uuid, code: &str) -> Result<CodeCheck, DbErr> {
        let now = Utc::now();
        let matching = email_verification_code::Entity::find()
            .filter(email_verification_code::Column::UserId.eq(user_id))
            .filter(email_verification_code::Column::Code.eq(code))
            .filter(email_verification_code::Column::IsUsed.eq(false))
            .filter(email_verification_code::Column::ExpiresAt.gt(now))
            .one(db)
            .await?;

        match matching {
            Some(found) => {
                let mut found: email_verification_code::ActiveModel = found.into();
                found.is_used = Set(true);
                found.used_at = Set(Some(now.into()));
                found.update(db).await?;
                Ok(CodeCheck::Valid)
            }
            None => {
                email_verification_code::Entity::update_many()
                    .col_expr(
                        email_verification_code::Column::FailedAttempts,
                        Expr::col(email_verification_code::Column::FailedAttempts).add(1),
                    )
                    .filter(email_verification_code::Column::UserId.eq(user_id))
                    .filter(email_verification_code::Column::IsUsed.eq(false))
                    .exec(db)
                    .await?;
                Ok(CodeCheck::InvalidOrExpired)
            }
        }
    }

    pub async fn cooldown_remaining(
        db: &DbConn,
        user_id: Uuid,
        cooldown_minutes: i64,
    ) -> Result<Option<i64>, DbErr> {
        let threshold = Utc::now() - Duration::minutes(cooldown_minutes);
        let recent = email_verification_code::Entity::find()
            .filter(email_verification_code::Column::UserId.eq(user_id))
            .filter(email_verification_code::Column::CreatedAt.gt(threshold))
            .order_by_desc(email_verification_code::Column::CreatedAt)
            .one(db)
            .await?;
        Ok(recent.map(|code| {
            (code.created_at.with_timezone(&Utc) + Duration::minutes(cooldown_minutes)
                - Utc::now())
            .num_seconds()
        }))
    }
}
