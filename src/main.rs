mod config;
mod model;
mod families;
mod normalizer;
mod resolver;
mod rewriter;
mod scraper;
mod parser;
mod formatter;
mod lookup;
mod notifier;

use config::load_config;
use lookup::LookupService;
use notifier::TelegramNotifier;
use crate::scraper::ScraperImpl;
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("😱 Panic occurred: {}", panic_info);
    }));

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            std::process::exit(1);
        }
    };

    let fetcher = match ScraperImpl::new(&config.base_url) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to create scraper: {}", e);
            std::process::exit(1);
        }
    };
    let lookup = Arc::new(LookupService::new(Box::new(fetcher)));

    let notifier = match TelegramNotifier::new(&config, lookup) {
        Ok(n) => n,
        Err(e) => {
            error!("Failed to create Telegram client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = notifier.set_my_commands().await {
        warn!("setMyCommands failed: {:?}", e);
    }

    info!("▶️ Starting Telegram listener, comparison site: {}", config.base_url);
    notifier.listen_for_commands().await;
}
