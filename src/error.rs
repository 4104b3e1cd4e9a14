use std::io;
use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to fetch token data: {0}")]
    FetchError(String),
    #[error("Malformed market data: {0}")]
    MalformedDataError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Failed to send Telegram message: {0}")]
    DeliveryError(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<teloxide::RequestError> for Error {
    fn from(err: teloxide::RequestError) -> Self {
        Error::DeliveryError(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}

pub type Result<T> = StdResult<T, Error>;
