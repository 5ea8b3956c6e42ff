// notifier/telegram/sender.rs

use crate::model::NotifyError;
use crate::notifier::telegram::TelegramNotifier;
use tracing::{debug, warn};

/// Sends a plain text reply to a chat.
pub async fn send_text(notifier: &TelegramNotifier, chat_id: i64, text: &str) -> Result<(), NotifyError> {
    let params = [
        ("chat_id", chat_id.to_string()),
        ("text", text.to_string()),
    ];
    let response = notifier
        .client
        .post(notifier.api_url("sendMessage"))
        .form(&params)
        .send()
        .await
        .map_err(|e| NotifyError::ApiError(format!("Send failed: {}", e)))?;
    let status = response.status();
    let body = response.text().await.unwrap_or_else(|_| "unknown".into());
    if !status.is_success() {
        warn!("❌ Telegram API responded [{}]: {}", status, body);
        return Err(NotifyError::Unreachable);
    }
    debug!("✅ Telegram text sent [{}] to chat {}", status, chat_id);
    Ok(())
}
