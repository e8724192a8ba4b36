// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Every user-visible string, notification text included, goes through a
//! Fluent bundle embedded from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, then system settings
//! - Named arguments (`{ $field }`) for notification messages
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
