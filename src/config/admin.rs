use serde::{Deserialize, Serialize};

/// Admin login configuration managed by Figment.
///
/// With both fields empty, login always fails and the content API is
/// effectively read-only.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AdminConfig {
    /// Plaintext admin password, intended for local development.
    /// TOML: `admin.password`. Default: empty.
    #[serde(default)]
    pub password: String,

    /// Hex-encoded SHA-256 digest of the admin password. Takes precedence
    /// over `password` when set; generate with `vitrine::auth::hash_password`.
    /// TOML: `admin.password_sha256`. Default: empty.
    #[serde(default)]
    pub password_sha256: String,
}

impl AdminConfig {
    pub fn login_enabled(&self) -> bool {
        !self.password.trim().is_empty() || !self.password_sha256.trim().is_empty()
    }
}
