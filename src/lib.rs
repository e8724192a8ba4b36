// SPDX-License-Identifier: MPL-2.0
//! `iced_portfolio` is an interactive personal portfolio built with the Iced GUI framework.
//!
//! It provides theme switching, scroll-driven animations, skill tabs, a contact
//! form with client-side validation, a project details modal and a plain-text
//! résumé download, with internationalization through Fluent.

#![doc(html_root_url = "https://docs.rs/iced_portfolio/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
