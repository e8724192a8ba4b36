// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each `handle_*` function receives an [`UpdateContext`] borrowing the
//! controllers it may touch, applies the state transition and returns the
//! follow-up task, if any.

use super::{paths, persistence, Message, PageReveal};
use crate::config::Config;
use crate::content::SiteContent;
use crate::domain::catalog::Catalog;
use crate::domain::contact::{ContactForm, SubmitOutcome, ValidationError};
use crate::domain::layout::PageLayout;
use crate::domain::modal::ProjectModal;
use crate::domain::navigation::{Navigation, Section};
use crate::domain::resume::{self, ResumeDownload};
use crate::domain::reveal::PageViewport;
use crate::domain::schedule::Ticket;
use crate::domain::tabs::TabSwitcher;
use crate::domain::typing::TypingAnimator;
use crate::error::ResumeError;
use crate::i18n::fluent::I18n;
use crate::ui::contact;
use crate::ui::design_tokens::sizing;
use crate::ui::hero::{self, Event as HeroEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{Notification, Presenter};
use crate::ui::projects;
use crate::ui::skills;
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Size, Task};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Id of the scrollable holding the page sections.
pub const PAGE_SCROLLABLE_ID: &str = "portfolio-page";

/// Context for update operations containing references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a Path>,
    pub theme_mode: &'a mut ThemeMode,
    pub content: &'a SiteContent,
    pub catalog: &'a Catalog,
    pub layout: &'a PageLayout,
    pub navigation: &'a mut Navigation,
    pub typing: &'a mut TypingAnimator,
    pub reveal: &'a mut PageReveal,
    pub tabs: &'a mut TabSwitcher,
    pub contact: &'a mut ContactForm,
    pub modal: &'a mut ProjectModal,
    pub resume: &'a mut ResumeDownload,
    pub notifications: &'a mut Presenter,
    pub viewport: &'a mut PageViewport,
    pub now: Instant,
}

impl UpdateContext<'_> {
    fn notify(&mut self, notification: Notification) {
        self.notifications.notify(notification, self.now);
    }

    /// Re-runs every visibility observer against the current viewport.
    fn observe(&mut self) {
        self.reveal
            .on_scroll(*self.viewport, self.tabs.active(), self.now);
    }
}

/// Handles navbar component messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.navigation) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ScrollTo(section) => start_scroll(ctx, section),
        NavbarEvent::ToggleTheme => handle_toggle_theme(ctx),
    }
}

/// Handles hero call-to-action messages.
pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: &hero::Message) -> Task<Message> {
    match hero::update(message) {
        HeroEvent::ScrollTo(section) => start_scroll(ctx, section),
        HeroEvent::DownloadResume => start_resume_download(ctx),
    }
}

fn start_scroll(ctx: &mut UpdateContext<'_>, section: Section) -> Task<Message> {
    if ctx.modal.scroll_locked() {
        return Task::none();
    }
    tracing::debug!(?section, from = ctx.viewport.offset, "smooth scroll");
    ctx.navigation.scroll_to(
        section,
        ctx.viewport.offset,
        ctx.layout,
        ctx.viewport.height,
        ctx.now,
    );
    Task::none()
}

/// Flips the theme, persists it and tells the user.
///
/// A failed save keeps the new theme for this session and reports the error
/// instead of the confirmation.
fn handle_toggle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mode = ctx.theme_mode.toggled();
    *ctx.theme_mode = mode;

    match persistence::persist_theme(ctx.config, mode, ctx.config_dir) {
        Ok(()) => {
            tracing::info!(theme = mode.as_str(), "theme switched");
            let label = ctx.i18n.tr(mode.label_key());
            ctx.notify(Notification::info("notification-theme-switched").with_arg("mode", label));
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to persist theme");
            ctx.notify(Notification::error("notification-config-save-error"));
        }
    }
    Task::none()
}

/// Handles skill tab selection.
pub fn handle_skills_message(
    ctx: &mut UpdateContext<'_>,
    message: skills::Message,
) -> Task<Message> {
    match message {
        skills::Message::SelectTab(index) => {
            if ctx.tabs.select(index, ctx.now) {
                ctx.observe();
            } else {
                tracing::debug!(index, "ignoring out-of-range skill tab");
            }
        }
    }
    Task::none()
}

/// Handles project card and modal messages.
pub fn handle_projects_message(
    ctx: &mut UpdateContext<'_>,
    message: projects::Message,
) -> Task<Message> {
    match message {
        projects::Message::Open(key) => {
            if ctx.modal.open(ctx.catalog, &key) {
                ctx.navigation.cancel_scroll();
            }
        }
        projects::Message::Close => ctx.modal.close(),
    }
    Task::none()
}

/// Handles contact form edits and submission.
pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    match message {
        contact::Message::FieldChanged(field, value) => {
            if !ctx.contact.is_sending() {
                ctx.contact.set_field(field, value);
            }
        }
        contact::Message::Submit => {
            let outcome = ctx.contact.submit(
                ctx.now,
                ctx.config.min_message_length(),
                ctx.config.send_delay(),
            );
            match outcome {
                SubmitOutcome::Ignored => {}
                SubmitOutcome::Rejected(error) => {
                    tracing::debug!(?error, "contact form rejected");
                    let notification = validation_notification(ctx.i18n, &error);
                    ctx.notify(notification);
                }
                SubmitOutcome::Sending => tracing::info!("contact message sending"),
            }
        }
    }
    Task::none()
}

/// Builds the error notification for a rejected form. Missing fields are
/// named with their translated label.
fn validation_notification(i18n: &I18n, error: &ValidationError) -> Notification {
    let notification = Notification::error(error.i18n_key());
    match error {
        ValidationError::Missing(field) => notification.with_arg(
            "field",
            i18n.tr(contact::field_label_key(*field)).to_lowercase(),
        ),
        _ => error
            .args()
            .into_iter()
            .fold(notification, |n, (key, value)| n.with_arg(key, value)),
    }
}

/// Starts writing the résumé into the download directory.
fn start_resume_download(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let ticket = ctx.resume.start();
    let text = resume::generate(&ctx.content.resume, chrono::Local::now().naive_local());
    let dir = paths::get_download_dir_with_override(ctx.config.resume.download_dir.clone());
    tracing::info!(dir = ?dir, "downloading résumé");

    Task::perform(resume::export(dir, text), move |result| {
        Message::ResumeSaved { ticket, result }
    })
}

/// Reports the outcome of a résumé download, unless a newer one started since.
pub fn handle_resume_saved(
    ctx: &mut UpdateContext<'_>,
    ticket: Ticket,
    result: Result<PathBuf, ResumeError>,
) -> Task<Message> {
    if !ctx.resume.finish(ticket) {
        tracing::debug!("discarding stale résumé completion");
        return Task::none();
    }

    match result {
        Ok(path) => {
            tracing::info!(path = %path.display(), "résumé saved");
            ctx.notify(
                Notification::success("notification-resume-downloaded")
                    .with_arg("path", path.display().to_string()),
            );
        }
        Err(err) => {
            tracing::warn!(error = %err, "résumé download failed");
            let notification = match &err {
                ResumeError::WriteFailed(reason) => {
                    Notification::error(err.i18n_key()).with_arg("error", reason.clone())
                }
                _ => Notification::error(err.i18n_key()),
            };
            ctx.notify(notification);
        }
    }
    Task::none()
}

/// Advances every timer and animation to `ctx.now`.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let now = ctx.now;

    ctx.typing.poll(now);

    if let Some(step) = ctx.tabs.poll(now) {
        ctx.reveal.apply_refill(step, ctx.tabs.active(), now);
    }

    if ctx.contact.poll(now) {
        tracing::info!("contact message sent");
        ctx.notify(Notification::success("notification-contact-sent"));
    }

    ctx.notifications.tick(now);

    match ctx.navigation.poll_scroll(now) {
        Some(offset) => snap_page_to(ctx.layout, ctx.viewport.height, offset),
        None => Task::none(),
    }
}

/// Moves the page scrollable to the absolute `offset`.
fn snap_page_to(layout: &PageLayout, viewport_height: f32, offset: f32) -> Task<Message> {
    let max_offset = layout.max_offset(viewport_height);
    let y = if max_offset > 0.0 {
        (offset / max_offset).clamp(0.0, 1.0)
    } else {
        0.0
    };
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset { x: 0.0, y })
}

/// Tracks the page viewport and fires reveal animations.
pub fn handle_scrolled(ctx: &mut UpdateContext<'_>, offset: f32, height: f32) -> Task<Message> {
    *ctx.viewport = PageViewport { offset, height };
    ctx.navigation.on_scroll(offset, ctx.layout);
    ctx.observe();
    Task::none()
}

/// Switches between full and compact navigation and refreshes the viewport.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    ctx.navigation.set_window_width(size.width);
    ctx.viewport.height = (size.height - sizing::NAVBAR_HEIGHT).max(0.0);
    ctx.observe();
    Task::none()
}

/// Escape closes the project modal.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.modal.is_open() {
        ctx.modal.close();
    }
    Task::none()
}
