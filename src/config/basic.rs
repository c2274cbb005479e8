use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Basic (core) configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BasicConfig {
    /// HTTP server listen address (e.g., "0.0.0.0", "127.0.0.1").
    /// TOML: `basic.listen_addr`. Default: `0.0.0.0`.
    #[serde(default = "default_listen_ip")]
    pub listen_addr: IpAddr,

    /// HTTP server listen port.
    /// TOML: `basic.listen_port`. Default: `8188`.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Database URL for SQLite (e.g., "sqlite://content.db"). Empty means
    /// unconfigured: every public read resolves to fallback content and
    /// mutations fail with 500.
    /// TOML: `basic.database_url`. Default: empty.
    #[serde(default)]
    pub database_url: String,

    /// Log level for tracing subscriber initialization (e.g., "error",
    /// "warn", "info", "debug", "trace").
    /// TOML: `basic.loglevel`. Default: `info`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Drops the `Secure` attribute from the admin session cookie so local
    /// HTTP development can log in.
    /// TOML: `basic.insecure_cookie`. Default: `false`.
    #[serde(default)]
    pub insecure_cookie: bool,
}

impl BasicConfig {
    pub fn storage_configured(&self) -> bool {
        !self.database_url.trim().is_empty()
    }
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_ip(),
            listen_port: default_listen_port(),
            database_url: String::new(),
            loglevel: default_loglevel(),
            insecure_cookie: false,
        }
    }
}

fn default_listen_ip() -> IpAddr {
    Ipv4Addr::new(0, 0, 0, 0).into()
}

fn default_listen_port() -> u16 {
    8188
}

fn default_loglevel() -> String {
    "info".to_string()
}
