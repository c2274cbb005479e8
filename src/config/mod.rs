mod admin;
mod basic;
mod mail;

pub use admin::AdminConfig;
pub use basic::BasicConfig;
pub use mail::MailConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::LazyLock};

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Admin login configuration (see `admin` table in config.toml).
    #[serde(default)]
    pub admin: AdminConfig,

    /// Outbound contact-mail configuration (see `mail` table in config.toml).
    #[serde(default)]
    pub mail: MailConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "VITRINE_";

impl Config {
    /// Builds a Figment that merges defaults, an optional config TOML file,
    /// and `VITRINE_`-prefixed environment variables (nested with `__`, e.g.
    /// `VITRINE_BASIC__DATABASE_URL`).
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads configuration from all optional sources. Nothing is required:
    /// an unset datastore means every public read resolves to fallback
    /// content, and an unset admin password means login always fails.
    pub fn from_optional_sources() -> Self {
        Self::figment()
            .extract()
            .unwrap_or_else(|err| panic!("failed to extract configuration: {err}"))
    }
}

/// Global, lazily-initialized configuration instance.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_optional_sources);
