use crate::error::VitrineError;
use crate::mail::ContactMessage;
use crate::server::router::VitrineState;
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, info};

/// POST `/api/contact`
///
/// Validation failures return 400 with a field message. Once validation
/// passes the caller always hears success: email delivery is best-effort
/// and a failed or unconfigured provider only downgrades to a server-side
/// log of the submission.
pub async fn submit(
    State(state): State<VitrineState>,
    Json(message): Json<ContactMessage>,
) -> Result<Response, VitrineError> {
    validate(&message).map_err(VitrineError::Validation)?;

    if !state.mailer.is_configured() {
        info!(
            name = %message.name,
            email = %message.email,
            subject = %message.subject,
            "contact submission received (mail not configured)"
        );
        return Ok(Json(json!({
            "success": true,
            "message": "Message received successfully! (email not configured)"
        }))
        .into_response());
    }

    match state.mailer.send_contact_notification(&message).await {
        Ok(()) => Ok(Json(json!({
            "success": true,
            "message": "Message sent successfully! I will get back to you soon."
        }))
        .into_response()),
        Err(err) => {
            error!(error = %err, "contact notification delivery failed");
            info!(
                name = %message.name,
                email = %message.email,
                subject = %message.subject,
                message = %message.message,
                "contact submission logged after delivery failure"
            );
            Ok(Json(json!({
                "success": true,
                "message": "Message received! Email delivery is temporarily unavailable, \
                            but your message was logged."
            }))
            .into_response())
        }
    }
}

pub(crate) fn validate(message: &ContactMessage) -> Result<(), String> {
    if message.name.trim().chars().count() < 2 {
        return Err("Name must be at least 2 characters".to_string());
    }
    if !is_valid_email(message.email.trim()) {
        return Err("Invalid email address".to_string());
    }
    if message.subject.trim().chars().count() < 3 {
        return Err("Subject must be at least 3 characters".to_string());
    }
    if message.message.trim().chars().count() < 10 {
        return Err("Message must be at least 10 characters".to_string());
    }
    Ok(())
}

/// `local@domain` with a dotted domain; no whitespace or second `@`.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean =
        |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');
    clean(local)
        && clean(domain)
        && domain
            .split_once('.')
            .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
}
