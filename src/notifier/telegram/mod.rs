pub mod sender;
pub mod listener;
pub mod command_handler;

use crate::config::AppConfig;
use crate::lookup::LookupService;
use crate::model::NotifyError;
use reqwest::Client;
use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use std::time::Duration;

pub struct TelegramNotifier {
    pub bot_token: String,
    pub client: Client,
    pub offset: Arc<AtomicI64>,
    pub lookup: Arc<LookupService>,
    pub poll_interval: Duration,
}

impl TelegramNotifier {
    pub fn new(config: &AppConfig, lookup: Arc<LookupService>) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()
            .map_err(|e| NotifyError::ApiError(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            bot_token: config.telegram_bot_token.clone(),
            client,
            offset: Arc::new(AtomicI64::new(0)),
            lookup,
            poll_interval: Duration::from_secs(config.poll_interval_seconds),
        })
    }

    pub fn api_url(&self, method: &str) -> String {
        format!("https://api.telegram.org/bot{}/{}", self.bot_token, method)
    }

    pub async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), NotifyError> {
        sender::send_text(self, chat_id, text).await
    }

    pub async fn listen_for_commands(&self) {
        listener::listen_for_commands(self).await;
    }

    pub async fn set_my_commands(&self) -> Result<(), reqwest::Error> {
        let commands = serde_json::json!({
            "commands": [
                { "command": "start", "description": "How to request a component" },
                { "command": "help", "description": "Input examples" }
            ]
        });
        self.client.post(self.api_url("setMyCommands")).json(&commands).send().await?;
        Ok(())
    }
}
