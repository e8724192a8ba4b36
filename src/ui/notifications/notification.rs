// SPDX-License-Identifier: MPL-2.0
//! A single toast message: what it says and how loud it is.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies one notification, so a dismiss click can't hit its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// How a toast is tinted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Accent stripe and glyph color.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Info => palette::INFO_500,
            Self::Success => palette::SUCCESS_500,
            Self::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Error => "⚠",
        }
    }
}

/// A translatable toast. The text is looked up only when drawn, so switching
/// locale never leaves a stale message on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
}

impl Notification {
    fn with_severity(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::with_severity(Severity::Info, message_key)
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::with_severity(Severity::Success, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, message_key)
    }

    /// Adds a Fluent variable, e.g. `{ $field }`.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((name.into(), value.into()));
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
}
