// notifier/telegram/command_handler.rs

use crate::formatter;
use crate::lookup::LookupService;
use crate::notifier::telegram::TelegramNotifier;
use tracing::{error, info, warn};

#[derive(Debug, PartialEq, Eq)]
enum Incoming<'a> {
    Start,
    Help,
    Lookup(&'a str),
}

/// `/start@SomeBot` in group chats is the same command as `/start`.
fn classify(text: &str) -> Incoming<'_> {
    let first = text.split_whitespace().next().unwrap_or_default();
    let command = first.split('@').next().unwrap_or_default();
    match command {
        "/start" => Incoming::Start,
        "/help" => Incoming::Help,
        _ => Incoming::Lookup(text),
    }
}

/// Reply text for one message. Fetch failures become a generic apology.
async fn reply_for(text: &str, lookup: &LookupService) -> String {
    match classify(text) {
        Incoming::Start => formatter::START_MESSAGE.to_string(),
        Incoming::Help => formatter::USAGE_HINT.to_string(),
        Incoming::Lookup(raw) => match lookup.reply(raw).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Lookup failed for '{}': {}", raw, e);
                formatter::FETCH_FAILED.to_string()
            }
        },
    }
}

/// Answers one incoming chat message.
pub async fn handle_message(text: &str, chat_id: i64, notifier: &TelegramNotifier) {
    info!("Handling message from chat {}: {}", chat_id, text);
    let reply = reply_for(text, &notifier.lookup).await;
    if let Err(e) = notifier.send_text(chat_id, &reply).await {
        warn!("Reply to chat {} failed: {:?}", chat_id, e);
    }
}
