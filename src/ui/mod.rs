// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Each page section follows the Elm-style "state down, messages up" pattern:
//! a `ViewContext` borrowed from the application state, a `Message` enum for
//! its interactions and, where the parent must react, an `Event` returned by
//! its `update` function.
//!
//! # Page Sections
//!
//! - [`navbar`] - Fixed header with section links, menu and theme toggles
//! - [`hero`] - Name, typed role line and call-to-action buttons
//! - [`about`] - About text and counted-up stats
//! - [`experience`] - Timeline
//! - [`skills`] - Category tabs and progress bars
//! - [`projects`] - Project cards and the details modal
//! - [`contact`] - Contact cards and form
//!
//! # Shared Infrastructure
//!
//! - [`section`] - Section frame matching the page layout
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod about;
pub mod contact;
pub mod design_tokens;
pub mod experience;
pub mod hero;
pub mod navbar;
pub mod notifications;
pub mod projects;
pub mod section;
pub mod skills;
pub mod styles;
pub mod theming;
