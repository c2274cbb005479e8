use serde::{Deserialize, Serialize};

/// Outbound contact-mail configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Resend API key. Empty means contact submissions are logged, not
    /// emailed.
    /// TOML: `mail.resend_api_key`. Default: empty.
    #[serde(default)]
    pub resend_api_key: String,

    /// Sender shown on contact notifications.
    /// TOML: `mail.from_email`. Default: `Portfolio <onboarding@resend.dev>`.
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// Recipient of contact notifications.
    /// TOML: `mail.to_email`. Default: empty.
    #[serde(default)]
    pub to_email: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: String::new(),
            from_email: default_from_email(),
            to_email: String::new(),
        }
    }
}

fn default_from_email() -> String {
    "Portfolio <onboarding@resend.dev>".to_string()
}
