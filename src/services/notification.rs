use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};

use crate::entities::{notification, sea_orm_active_enums::NotificationKind};

pub struct NotificationMutation;

impl NotificationMutation {
    pub async fn create(
        db: &DbConn,
        user_id: Option<Uuid>,
        recipient_email: String,
        kind: NotificationKind,
        title: String,
        message: String,
    ) -> Result<notification::Model, DbErr> {
        notification::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            recipient_email: Set(recipient_email),
            kind: Set(kind),
            title: Set(title),
            message: Set(message),
            is_read: Set(false),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await
    }
}
