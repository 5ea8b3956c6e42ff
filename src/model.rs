// Core structs: ComponentKind, NormalizedRequest, ResolvedComponent, ComponentReport
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Cpu,
    Gpu,
}

impl ComponentKind {
    /// Lowercase name used as the page prefix on the comparison site.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Cpu => "cpu",
            ComponentKind::Gpu => "gpu",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Family and model tokens as typed by the user, lowercased and joined with underscores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    pub family: String,
    pub model: String,
}

/// Family routed to a rule, with the URL template already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFamily {
    pub kind: ComponentKind,
    pub rule: &'static str,
    pub series: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedComponent {
    pub kind: ComponentKind,
    pub series: String,
    pub model: String,
}

impl ResolvedComponent {
    /// Query fragment spliced after `?` in the comparison page URL.
    pub fn query(&self) -> String {
        format!("{}{}", self.series, self.model)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportField {
    pub label: &'static str,
    pub value: String,
}

/// Everything scraped from one comparison page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentReport {
    pub kind: ComponentKind,
    pub name: String,
    pub score: String,
    pub fields: Vec<ReportField>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bot token is not set (TG_TOKEN or telegram_bot_token)")]
    MissingToken,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    HttpError(String),
    #[error("unexpected status {status} for {url}")]
    InvalidResponse { status: u16, url: String },
    #[error(transparent)]
    Parse(#[from] ParserError),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("bad selector `{0}`")]
    Selector(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("telegram api error: {0}")]
    ApiError(String),
    #[error("telegram api unreachable")]
    Unreachable,
}
