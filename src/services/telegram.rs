//! Telegram Bot API messaging sink.

use crate::config::TelegramSettings;
use crate::error::DeliveryError;
use crate::services::messaging::MessageSink;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends plain-text messages to one chat through `sendMessage`.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    http_client: Client,
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(settings: &TelegramSettings) -> Self {
        Self::with_client(settings, Client::new())
    }

    pub fn with_client(settings: &TelegramSettings, http_client: Client) -> Self {
        Self {
            http_client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
            chat_id: settings.chat_id.clone(),
        }
    }
}

#[async_trait]
impl MessageSink for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), DeliveryError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);

        let response = self
            .http_client
            .post(&url)
            .form(&[("chat_id", self.chat_id.as_str()), ("text", text)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed = serde_json::from_str::<SendMessageResponse>(&body).ok();

        match parsed {
            Some(SendMessageResponse { ok: true, .. }) if status.is_success() => {
                debug!(chat_id = %self.chat_id, "TelegramNotifier: message delivered");
                Ok(())
            }
            Some(SendMessageResponse { description, .. }) => Err(DeliveryError::Rejected {
                status: status.as_u16(),
                description: description.unwrap_or_else(|| "unknown error".to_string()),
            }),
            None => Err(DeliveryError::Rejected {
                status: status.as_u16(),
                description: body,
            }),
        }
    }
}
