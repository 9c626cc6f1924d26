//! Confirmation and notification gateway

pub mod channel;
pub mod recording;

use async_trait::async_trait;
use serde::Serialize;

pub use channel::{ChannelGateway, ConfirmRequest};
pub use recording::RecordingGateway;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Transient message shown after an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { level, title: title.into(), message: message.into() }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }
}

/// Question put to the user before a destructive action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
}

impl ConfirmPrompt {
    pub fn delete(label: &str) -> Self {
        Self {
            title: "Are you sure?".to_string(),
            message: format!("This {} will be permanently deleted.", label.to_lowercase()),
            confirm_label: "Yes, delete it".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

impl Confirmation {
    pub fn is_confirmed(self) -> bool {
        self == Confirmation::Confirmed
    }
}

/// User feedback capability injected into every store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Block until the user accepts or declines
    async fn confirm(&self, prompt: &ConfirmPrompt) -> Confirmation;

    async fn notify(&self, notice: Notice);
}
