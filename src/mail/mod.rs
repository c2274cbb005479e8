//! Best-effort contact notification delivery through the Resend HTTP API.

use crate::config::MailConfig;
use crate::error::VitrineError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// A validated contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub struct Mailer {
    client: reqwest::Client,
    cfg: MailConfig,
}

impl Mailer {
    pub fn new(cfg: MailConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build reqwest client");

        Self { client, cfg }
    }

    /// Delivery needs both an API key and a recipient.
    pub fn is_configured(&self) -> bool {
        !self.cfg.resend_api_key.trim().is_empty() && !self.cfg.to_email.trim().is_empty()
    }

    pub async fn send_contact_notification(
        &self,
        message: &ContactMessage,
    ) -> Result<(), VitrineError> {
        let payload = json!({
            "from": self.cfg.from_email,
            "to": self.cfg.to_email,
            "reply_to": message.email,
            "subject": format!("Portfolio Contact: {}", message.subject),
            "html": render_notification(message),
        });

        let resp = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(self.cfg.resend_api_key.trim())
            .json(&payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(VitrineError::MailError(format!(
                "resend returned {status}: {body}"
            )));
        }

        Ok(())
    }
}

fn render_notification(message: &ContactMessage) -> String {
    format!(
        "<div><h2>New Contact Form Submission</h2>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Subject:</strong> {}</p>\
         <p><strong>Message:</strong></p><p>{}</p></div>",
        escape_html(&message.name),
        escape_html(&message.email),
        escape_html(&message.subject),
        escape_html(&message.message).replace('\n', "<br>"),
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_without_key_or_recipient() {
        let mailer = Mailer::new(MailConfig::default());
        assert!(!mailer.is_configured());

        let mailer = Mailer::new(MailConfig {
            resend_api_key: "re_123".to_string(),
            to_email: String::new(),
            ..MailConfig::default()
        });
        assert!(!mailer.is_configured());

        let mailer = Mailer::new(MailConfig {
            resend_api_key: "re_123".to_string(),
            to_email: "owner@example.org".to_string(),
            ..MailConfig::default()
        });
        assert!(mailer.is_configured());
    }

    #[test]
    fn notification_escapes_markup() {
        let message = ContactMessage {
            name: "<script>".to_string(),
            email: "a@b.co".to_string(),
            subject: "Hi".to_string(),
            message: "line one\nline two".to_string(),
        };
        let html = render_notification(&message);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("line one<br>line two"));
    }
}
