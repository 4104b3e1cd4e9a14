use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";
pub const DEXSCREENER_TOKENS_URL: &str = "https://api.dexscreener.com/latest/dex/tokens";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dexscreener: DexScreenerConfig,
    pub telegram: TelegramConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DexScreenerConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for DexScreenerConfig {
    fn default() -> Self {
        Self {
            url: DEXSCREENER_TOKENS_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DexScreenerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TelegramConfig {
    /// Bot API base URL, e.g. a self-hosted Bot API server.
    pub api_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise the default path if it exists,
    /// otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Bot credentials taken from the process environment.
#[derive(Clone, Default, PartialEq)]
pub struct Credentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl Credentials {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Unset variables become empty strings; presence is checked at send time.
    pub fn from_env() -> Self {
        Self {
            bot_token: env::var(BOT_TOKEN_VAR).unwrap_or_default(),
            chat_id: env::var(CHAT_ID_VAR).unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.bot_token.is_empty() || self.chat_id.is_empty() {
            return Err(Error::ConfigError(
                "Telegram bot token or chat ID not found in environment variables".into(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
