use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const TOKEN_ENV: &str = "TG_TOKEN";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub base_url: String,
    pub poll_interval_seconds: u64,
    pub http_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            telegram_bot_token: String::new(),
            base_url: "https://www.chaynikam.info".to_string(),
            poll_interval_seconds: 1,
            http_timeout_seconds: 10,
        }
    }
}

/// Reads `path` if it exists, then lets `TG_TOKEN` override the token.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = if Path::new(path).exists() {
        Some(fs::read_to_string(path)?)
    } else {
        None
    };
    build_config(content.as_deref(), std::env::var(TOKEN_ENV).ok())
}

fn build_config(content: Option<&str>, env_token: Option<String>) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = match content {
        Some(json) => serde_json::from_str(json)?,
        None => AppConfig::default(),
    };

    if let Some(token) = env_token.filter(|t| !t.trim().is_empty()) {
        config.telegram_bot_token = token;
    }
    if config.telegram_bot_token.trim().is_empty() {
        return Err(ConfigError::MissingToken);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_token_alone_is_enough() {
        let config = build_config(None, Some("123:abc".into())).unwrap();
        assert_eq!(config.telegram_bot_token, "123:abc");
        assert_eq!(config.base_url, "https://www.chaynikam.info");
        assert_eq!(config.poll_interval_seconds, 1);
    }

    #[test]
    fn env_token_overrides_file() {
        let json = r#"{"telegram_bot_token": "from-file", "poll_interval_seconds": 3}"#;
        let config = build_config(Some(json), Some("from-env".into())).unwrap();
        assert_eq!(config.telegram_bot_token, "from-env");
        assert_eq!(config.poll_interval_seconds, 3);
        assert_eq!(config.http_timeout_seconds, 10);

        let config = build_config(Some(json), None).unwrap();
        assert_eq!(config.telegram_bot_token, "from-file");
    }

    #[test]
    fn missing_token_fails() {
        assert!(matches!(build_config(None, None), Err(ConfigError::MissingToken)));
        assert!(matches!(build_config(Some("{}"), Some("  ".into())), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn malformed_file_fails() {
        assert!(matches!(build_config(Some("{"), None), Err(ConfigError::Parse(_))));
    }
}
