//! Transient user notifications.
//!
//! Components report outcomes the user should see (a finished countdown, a
//! failed generation) through a [`Notifier`] instead of printing directly, so
//! the same core logic can surface notices as terminal lines, log records or
//! test assertions.

use log::{error, info};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A short, user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    /// Informational notice.
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            description: None,
        }
    }

    /// Success notice.
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: None,
        }
    }

    /// Error notice.
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: None,
        }
    }

    /// Adds a second line of detail.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Sink for user-visible notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that forwards notices to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        let detail = notice.description.as_deref().unwrap_or_default();
        match notice.level {
            NoticeLevel::Error => error!("{} {}", notice.title, detail),
            NoticeLevel::Info | NoticeLevel::Success => info!("{} {}", notice.title, detail),
        }
    }
}
