// notifier/telegram/listener.rs

use crate::notifier::telegram::TelegramNotifier;
use crate::notifier::telegram::command_handler::handle_message;
use serde::Deserialize;
use std::sync::atomic::Ordering;
use tokio::time::sleep;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct TelegramApiResponse {
    result: Vec<TelegramUpdate>,
}

#[derive(Debug, Deserialize)]
struct TelegramUpdate {
    update_id: i64,
    message: Option<TelegramMessage>,
}

#[derive(Debug, Deserialize)]
struct TelegramMessage {
    chat: TelegramChat,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TelegramChat {
    id: i64,
}

/// Polls for Telegram updates and answers them one at a time, in order.
pub async fn listen_for_commands(notifier: &TelegramNotifier) {
    let url = notifier.api_url("getUpdates");
    loop {
        let current_offset = notifier.offset.load(Ordering::SeqCst);
        let response = notifier.client.get(&url)
            .query(&[("offset", current_offset.to_string())])
            .send()
            .await;
        match response {
            Ok(resp) => match resp.json::<TelegramApiResponse>().await {
                Ok(api_response) => {
                    for update in api_response.result {
                        if let Some(message) = update.message.as_ref() {
                            if let Some(text) = message.text.as_deref() {
                                handle_message(text, message.chat.id, notifier).await;
                            }
                        }
                        notifier.offset.store(update.update_id + 1, Ordering::SeqCst);
                    }
                }
                Err(e) => warn!("getUpdates decode error: {:?}", e),
            },
            Err(e) => warn!("getUpdates request error: {:?}", e),
        }
        sleep(notifier.poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_updates_with_and_without_text() {
        let raw = r#"{"ok":true,"result":[
            {"update_id":10,"message":{"message_id":1,"chat":{"id":42,"type":"private"},"text":"i5 9400f"}},
            {"update_id":11,"message":{"message_id":2,"chat":{"id":42,"type":"private"}}},
            {"update_id":12,"edited_message":{"message_id":1,"chat":{"id":42}}}
        ]}"#;
        let parsed: TelegramApiResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(parsed.result.len(), 3);
        let first = parsed.result[0].message.as_ref().unwrap();
        assert_eq!(first.chat.id, 42);
        assert_eq!(first.text.as_deref(), Some("i5 9400f"));
        assert!(parsed.result[1].message.as_ref().unwrap().text.is_none());
        assert!(parsed.result[2].message.is_none());
        assert_eq!(parsed.result[2].update_id, 12);
    }
}
