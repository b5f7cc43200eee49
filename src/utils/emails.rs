use lettre::{
    message::{header::ContentType, MultiPart, SinglePart},
    transport::smtp::{
        authentication::{Credentials, Mechanism},
        PoolConfig,
    },
    Message, SmtpTransport, Transport,
};

#[tracing::instrument(
    name = "Generic e-mail sending function.",
    skip(subject, html_content, text_content),
    fields(recipient_email = %recipient_email, recipient_name = %recipient_name)
)]
pub async fn send_email(
    recipient_email: String,
    recipient_name: String,
    subject: impl Into<String>,
    html_content: impl Into<String>,
    text_content: impl Into<String>,
) -> Result<(), String> {
    let settings = crate::settings::get_settings().expect("Failed to read settings.");

    if !settings.email.enabled {
        tracing::event!(target: "backend", tracing::Level::INFO, "Email sending disabled; skipping delivery.");
        return Ok(());
    }

    let email = Message::builder()
        .from(match settings.email.sender.parse() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to get sender mailbox setting: {:#?}", e);
                return Err(e.to_string());
            }
        })
        .to(
            match format!("{} <{}>", recipient_name, recipient_email).parse() {
                Ok(mailbox) => mailbox,
                Err(e) => {
                    tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to parse recipient mailbox: {:#?}", e);
                    return Err(e.to_string());
                }
            },
        )
        .subject(subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(text_content.into()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html_content.into()),
                ),
        )
        .map_err(|e| e.to_string())?;

    let credentials = Credentials::new(settings.email.host_user, settings.email.host_user_password);
    let sender = SmtpTransport::starttls_relay(&settings.email.host)
        .map_err(|e| e.to_string())?
        .credentials(credentials)
        .authentication(vec![Mechanism::Plain])
        .pool_config(PoolConfig::new().max_size(20))
        .build();

    match sender.send(&email) {
        Ok(_) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "Email successfully sent!");
            Ok(())
        }
        Err(e) => {
            tracing::event!(target: "backend", tracing::Level::ERROR, "Could not send email: {:#?}", e);
            Err(format!("Could not send email: {:#?}", e))
        }
    }
}

/// Renders one of the code templates and mails it to the user.
#[tracing::instrument(
    name = "Sending a verification code e-mail.",
    skip(code),
    fields(recipient_email = %recipient_email)
)]
pub async fn send_code_email(
    subject: String,
    recipient_email: String,
    recipient_first_name: String,
    recipient_last_name: String,
    template_name: &str,
    code: String,
    expiration_minutes: i64,
) -> Result<(), String> {
    let template = crate::ENV
        .get_template(template_name)
        .map_err(|e| e.to_string())?;
    let html = template
        .render(minijinja::context! {
            title => subject.clone(),
            first_name => recipient_first_name.clone(),
            code => code.clone(),
            expiration_minutes => expiration_minutes,
        })
        .map_err(|e| e.to_string())?;
    let text = format!(
        "Hi {},\n\nYour 4Paw Veterinary Clinic code is: {}\nIt expires in {} minutes.",
        recipient_first_name, code, expiration_minutes
    );

    let recipient_name = format!("{} {}", recipient_first_name, recipient_last_name);
    send_email(recipient_email, recipient_name, subject, html, text).await
}
