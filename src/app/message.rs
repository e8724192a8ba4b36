// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::ResumeError;
use crate::domain::schedule::Ticket;
use crate::ui::contact;
use crate::ui::hero;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::projects;
use crate::ui::skills;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Skills(skills::Message),
    Projects(projects::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving every timer and animation.
    Tick(Instant),
    /// The page scrolled, by the user or by a smooth scroll step.
    Scrolled { offset: f32, height: f32 },
    WindowResized(Size),
    EscapePressed,
    /// Completion of the résumé download started with `ticket`.
    ResumeSaved {
        ticket: Ticket,
        result: Result<PathBuf, ResumeError>,
    },
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale forced by the user.
    pub lang: Option<String>,
    /// Explicit config directory, taking precedence over every other source.
    pub config_dir: Option<PathBuf>,
}
