use sea_orm::DatabaseConnection;
use tokio::sync::mpsc;

use crate::{
    entities::sea_orm_active_enums::NotificationKind,
    services::notification::NotificationMutation, utils::emails,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentEvent {
    Scheduled,
    Cancelled,
    Completed,
}

impl AppointmentEvent {
    fn subject(&self) -> &'static str {
        match self {
            AppointmentEvent::Scheduled => "Appointment Scheduled - 4Paw Veterinary Clinic",
            AppointmentEvent::Cancelled => "Appointment Cancelled - 4Paw Veterinary Clinic",
            AppointmentEvent::Completed => "Appointment Completed - 4Paw Veterinary Clinic",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Outbound {
    UserRegistration {
        user_id: uuid::Uuid,
        first_name: String,
        last_name: String,
        email: String,
        admin_emails: Vec<String>,
    },
    Appointment {
        owner_id: uuid::Uuid,
        owner_email: String,
        owner_name: String,
        event: AppointmentEvent,
        pet_name: String,
        date: chrono::NaiveDate,
        start_time: String,
    },
    System {
        user_id: Option<uuid::Uuid>,
        recipient_email: String,
        recipient_name: String,
        title: String,
        message: String,
    },
}

/// Cheap clone-able producer handle. Publishing never blocks the request
/// that triggered the event and a dead dispatcher only costs a log line.
#[derive(Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Outbound>,
}

impl Notifier {
    pub fn publish(&self, event: Outbound) {
        if self.tx.send(event).is_err() {
            tracing::event!(target: "backend", tracing::Level::WARN, "Notification dispatcher is gone; event dropped.");
        }
    }

    /// A handle with no dispatcher behind it; published events are dropped.
    pub fn disconnected() -> Self {
        let (tx, _rx) = mpsc::unbounded_channel();
        Self { tx }
    }
}

pub fn start_dispatcher(conn: DatabaseConnection) -> Notifier {
    let (tx, mut rx) = mpsc::unbounded_channel();
    actix_web::rt::spawn(async move {
        while let Some(event) = rx.recv().await {
            if let Err(e) = deliver(&conn, event).await {
                tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to deliver notification: {}", e);
            }
        }
    });
    Notifier { tx }
}

async fn deliver(db: &DatabaseConnection, event: Outbound) -> Result<(), String> {
    match event {
        Outbound::UserRegistration {
            user_id,
            first_name,
            last_name,
            email,
            admin_emails,
        } => {
            let full_name = format!("{} {}", first_name, last_name);
            let title = "Welcome to 4Paw Veterinary Clinic".to_string();
            let message = format!(
                "Thank you for registering, {}! Please verify your email address to complete your registration.",
                full_name
            );
            NotificationMutation::create(
                db,
                Some(user_id),
                email.clone(),
                NotificationKind::UserRegistration,
                title.clone(),
                message.clone(),
            )
            .await
            .map_err(|e| format!("{:?}", e))?;
            send_notification_email(email, full_name.clone(), title, message).await?;

            let admin_title = "New user registration".to_string();
            let admin_message = format!("{} just registered an account.", full_name);
            for admin_email in admin_emails {
                NotificationMutation::create(
                    db,
                    None,
                    admin_email.clone(),
                    NotificationKind::UserRegistration,
                    admin_title.clone(),
                    admin_message.clone(),
                )
                .await
                .map_err(|e| format!("{:?}", e))?;
                send_notification_email(
                    admin_email,
                    "Clinic Admin".to_string(),
                    admin_title.clone(),
                    admin_message.clone(),
                )
                .await?;
            }
            Ok(())
        }
        Outbound::Appointment {
            owner_id,
            owner_email,
            owner_name,
            event,
            pet_name,
            date,
            start_time,
        } => {
            let title = event.subject().to_string();
            let message = format!(
                "Appointment for {} on {} at {}.",
                pet_name,
                date.format("%d/%m/%Y"),
                start_time
            );
            NotificationMutation::create(
                db,
                Some(owner_id),
                owner_email.clone(),
                NotificationKind::Appointment,
                title.clone(),
                message.clone(),
            )
            .await
            .map_err(|e| format!("{:?}", e))?;
            send_notification_email(owner_email, owner_name, title, message).await
        }
        Outbound::System {
            user_id,
            recipient_email,
            recipient_name,
            title,
            message,
        } => {
            NotificationMutation::create(
                db,
                user_id,
                recipient_email.clone(),
                NotificationKind::System,
                title.clone(),
                message.clone(),
            )
            .await
            .map_err(|e| format!("{:?}", e))?;
            send_notification_email(recipient_email, recipient_name, title, message).await
        }
    }
}

async fn send_notification_email(
    recipient_email: String,
    recipient_name: String,
    title: String,
    message: String,
) -> Result<(), String> {
    let template = crate::ENV
        .get_template("notification_email.html")
        .map_err(|e| e.to_string())?;
    let html = template
        .render(minijinja::context! {
            title => title.clone(),
            message => message.clone(),
        })
        .map_err(|e| e.to_string())?;
    emails::send_email(recipient_email, recipient_name, title, html, message).await
}
