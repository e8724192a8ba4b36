// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`presenter`] - `Presenter` owning the single visible toast and its timers
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Notification, Presenter};
//!
//! let mut presenter = Presenter::new(config.notification_display());
//! presenter.notify(Notification::success("notification-contact-sent"), Instant::now());
//!
//! // In your view function
//! let overlay = Toast::view_overlay(&presenter, &i18n, now).map(Message::Notification);
//! ```

mod notification;
mod presenter;
mod toast;

pub use notification::{Notification, NotificationId, Severity};
pub use presenter::{Message as NotificationMessage, Presenter};
pub use toast::Toast;
