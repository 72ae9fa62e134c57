// SPDX-License-Identifier: MPL-2.0
//! Notification data: severity, i18n key and arguments, lifetime.

use crate::config::{NOTIFICATION_LONG_SECS, NOTIFICATION_SHORT_SECS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns `None` for errors, which require a manual dismiss.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => {
                Some(Duration::from_secs(NOTIFICATION_SHORT_SECS))
            }
            Severity::Warning => Some(Duration::from_secs(NOTIFICATION_LONG_SECS)),
            Severity::Error => None,
        }
    }
}

/// A message shown as a toast. The text is resolved through i18n at render
/// time, so a locale switch also updates visible toasts.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    shown_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            shown_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.message_args.push((key.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Same message: equal key and arguments.
    #[must_use]
    pub fn same_message(&self, other: &Notification) -> bool {
        self.message_key == other.message_key && self.message_args == other.message_args
    }

    /// Restarts the dismiss timer, used when a duplicate is pushed.
    pub(super) fn restart(&mut self, now: Instant) {
        self.shown_at = now;
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|lifetime| now.saturating_duration_since(self.shown_at) >= lifetime)
    }
}
