// SPDX-License-Identifier: MPL-2.0
//! Contact form: draft, validation and simulated submission.

use super::schedule::Timer;
use regex::Regex;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// `local@domain.tld`, no whitespace, exactly one `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Form fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Field name as shown in validation messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// The values typed into the form. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// First rule a draft breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Missing(Field),
    InvalidEmail,
    MessageTooShort { min: usize },
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::Missing(_) => "notification-contact-field-missing",
            ValidationError::InvalidEmail => "notification-contact-email-invalid",
            ValidationError::MessageTooShort { .. } => "notification-contact-message-too-short",
        }
    }

    /// Arguments interpolated into the message.
    #[must_use]
    pub fn args(&self) -> Vec<(&'static str, String)> {
        match self {
            ValidationError::Missing(field) => vec![("field", field.as_str().to_string())],
            ValidationError::InvalidEmail => Vec::new(),
            ValidationError::MessageTooShort { min } => vec![("min", min.to_string())],
        }
    }
}

/// Validates `draft`; the first failing rule wins.
///
/// 1. every field is non-blank, in [`Field::ALL`] order;
/// 2. the email has the `local@domain.tld` shape;
/// 3. the trimmed message has at least `min_message_length` characters.
pub fn validate(
    draft: &ContactDraft,
    min_message_length: Option<usize>,
) -> Result<(), ValidationError> {
    if let Some(field) = Field::ALL
        .into_iter()
        .find(|field| draft.get(*field).trim().is_empty())
    {
        return Err(ValidationError::Missing(field));
    }

    if !is_valid_email(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if let Some(min) = min_message_length {
        if draft.message.trim().chars().count() < min {
            return Err(ValidationError::MessageTooShort { min });
        }
    }

    Ok(())
}

/// Result of pressing the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight.
    Ignored,
    Rejected(ValidationError),
    Sending,
}

/// Contact form controller.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    send_timer: Timer,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    /// Whether the submit control is disabled and shows the sending label.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.send_timer.is_armed()
    }

    /// Validates the draft and, when valid, starts the simulated send.
    pub fn submit(
        &mut self,
        now: Instant,
        min_message_length: Option<usize>,
        send_delay: Duration,
    ) -> SubmitOutcome {
        if self.is_sending() {
            return SubmitOutcome::Ignored;
        }
        match validate(&self.draft, min_message_length) {
            Err(error) => SubmitOutcome::Rejected(error),
            Ok(()) => {
                self.send_timer.arm(now, send_delay);
                SubmitOutcome::Sending
            }
        }
    }

    /// Completes the simulated send once its delay elapsed.
    ///
    /// Returns `true` when the message was "sent": the draft is cleared and the
    /// submit control is available again.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.send_timer.poll(now) {
            self.draft = ContactDraft::default();
            true
        } else {
            false
        }
    }
}
