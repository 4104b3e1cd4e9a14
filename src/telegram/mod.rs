use async_trait::async_trait;
use log::{debug, info};
use reqwest::Url;
use teloxide::prelude::*;
use teloxide::types::Recipient;

use crate::config::{Credentials, TelegramConfig};
use crate::error::{Error, Result};
use crate::models::AnalyzedRecord;

/// Delivers one analyzed record to the destination channel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier {
    async fn notify(&self, record: &AnalyzedRecord) -> Result<()>;
}

pub fn format_message(record: &AnalyzedRecord) -> String {
    format!(
        "Token: {}\nCA: {}\nDescription: {}",
        record.name, record.contract_address, record.description
    )
}

/// Numeric ids address a chat directly; anything else is a channel username.
pub fn recipient(chat_id: &str) -> Recipient {
    let chat_id = chat_id.trim();
    match chat_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.to_string()),
    }
}

pub struct TelegramNotifier {
    credentials: Credentials,
    client: reqwest::Client,
    api_url: Option<Url>,
}

impl TelegramNotifier {
    pub fn new(credentials: Credentials, config: &TelegramConfig) -> Result<Self> {
        let api_url = config
            .api_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .map_err(|e| Error::ConfigError(format!("Invalid Telegram API URL: {}", e)))?;

        // Sends carry no timeout; only the market data fetch is bounded.
        let client = reqwest::Client::builder()
            .tcp_nodelay(true)
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build Telegram client: {}", e)))?;

        Ok(Self {
            credentials,
            client,
            api_url,
        })
    }

    fn bot(&self) -> Bot {
        let bot = Bot::with_client(&self.credentials.bot_token, self.client.clone());
        match &self.api_url {
            Some(url) => bot.set_api_url(url.clone()),
            None => bot,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, record: &AnalyzedRecord) -> Result<()> {
        self.credentials.validate()?;

        debug!("Sending {} to {}", record.name, self.credentials.chat_id);
        self.bot()
            .send_message(recipient(&self.credentials.chat_id), format_message(record))
            .await?;

        info!("Sent notification for {}", record.name);
        Ok(())
    }
}
