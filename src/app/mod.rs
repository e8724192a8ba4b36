// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page controllers.
//!
//! The `App` struct owns every controller (navigation, typing, reveal
//! animations, tabs, contact form, project modal, résumé download and the
//! notification presenter) and translates messages into state transitions and
//! side effects like config persistence or the résumé file write. Timers are
//! advanced from a single periodic `Tick`.

mod message;
pub mod paths;
mod persistence;
mod reveal;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use reveal::PageReveal;

use crate::config::{self, Config};
use crate::content::{self, SiteContent};
use crate::domain::catalog::Catalog;
use crate::domain::contact::ContactForm;
use crate::domain::layout::PageLayout;
use crate::domain::modal::ProjectModal;
use crate::domain::navigation::Navigation;
use crate::domain::resume::ResumeDownload;
use crate::domain::reveal::PageViewport;
use crate::domain::tabs::TabSwitcher;
use crate::domain::typing::{TypingAnimator, TypingTimings};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::{Notification, Presenter};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Explicit config directory, if one was forced at launch.
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    content: SiteContent,
    catalog: Catalog,
    layout: PageLayout,
    navigation: Navigation,
    typing: TypingAnimator,
    reveal: PageReveal,
    tabs: TabSwitcher,
    contact: ContactForm,
    modal: ProjectModal,
    resume: ResumeDownload,
    notifications: Presenter,
    /// Scroll position and height of the page viewport.
    viewport: PageViewport,
    /// Time of the last processed message.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("active_section", &self.navigation.active_section())
            .field("modal", &self.modal.key())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, localization and content, restores the theme and
    /// wires every controller. Nothing here is fatal: failures become
    /// notifications.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let now = Instant::now();
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let (content, content_failed) = match content::load() {
            Ok(content) => (content, false),
            Err(err) => {
                tracing::error!(error = %err, "site content could not be parsed");
                (SiteContent::default(), true)
            }
        };

        let mut app = Self::with_content(config, flags.config_dir, i18n, content, now);

        if let Some(key) = config_warning {
            app.notifications.notify(Notification::error(key), now);
        }
        if content_failed {
            app.notifications.notify(
                Notification::error("notification-content-load-error"),
                now,
            );
        }

        tracing::info!(
            theme = app.theme_mode.as_str(),
            locale = %app.i18n.current_locale(),
            projects = app.catalog.len(),
            "portfolio ready"
        );

        (app, Task::none())
    }

    fn with_content(
        config: Config,
        config_dir: Option<PathBuf>,
        i18n: I18n,
        content: SiteContent,
        now: Instant,
    ) -> Self {
        let layout = PageLayout::new(content.counts());
        let catalog = Catalog::new(content.projects.clone());
        let typing = TypingAnimator::new(&content.roles, TypingTimings::default(), now);
        let reveal = PageReveal::new(&content, &layout);
        let tabs = TabSwitcher::new(content.skills.len());
        let notifications = Presenter::new(config.notification_display());

        let mut app = Self {
            i18n,
            theme_mode: config.general.theme,
            config,
            config_dir,
            content,
            catalog,
            layout,
            navigation: Navigation::new(),
            typing,
            reveal,
            tabs,
            contact: ContactForm::new(),
            modal: ProjectModal::new(),
            resume: ResumeDownload::new(),
            notifications,
            viewport: PageViewport {
                offset: 0.0,
                height: WINDOW_DEFAULT_HEIGHT as f32 - sizing::NAVBAR_HEIGHT,
            },
            now,
        };
        app.navigation.set_window_width(WINDOW_DEFAULT_WIDTH as f32);
        app.reveal.on_scroll(app.viewport, app.tabs.active(), now);
        app
    }

    fn title(&self) -> String {
        self.i18n
            .tr_with_args("window-title", &[("name", self.content.profile.name.as_str())])
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = self.navigation.is_scrolling()
            || self.notifications.is_animating()
            || self.tabs.is_pending()
            || self.reveal.is_animating(self.now);

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(animating),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match &message {
            Message::Tick(now) => *now,
            _ => Instant::now(),
        };

        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &mut self.config,
            config_dir: self.config_dir.as_deref(),
            theme_mode: &mut self.theme_mode,
            content: &self.content,
            catalog: &self.catalog,
            layout: &self.layout,
            navigation: &mut self.navigation,
            typing: &mut self.typing,
            reveal: &mut self.reveal,
            tabs: &mut self.tabs,
            contact: &mut self.contact,
            modal: &mut self.modal,
            resume: &mut self.resume,
            notifications: &mut self.notifications,
            viewport: &mut self.viewport,
            now: self.now,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, &hero_message),
            Message::Skills(skills_message) => {
                update::handle_skills_message(&mut ctx, skills_message)
            }
            Message::Projects(projects_message) => {
                update::handle_projects_message(&mut ctx, projects_message)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications
                    .handle_message(&notification_message, ctx.now);
                Task::none()
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
            Message::Scrolled { offset, height } => {
                update::handle_scrolled(&mut ctx, offset, height)
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::ResumeSaved { ticket, result } => {
                update::handle_resume_saved(&mut ctx, ticket, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            content: &self.content,
            catalog: &self.catalog,
            layout: &self.layout,
            navigation: &self.navigation,
            typed: self.typing.display(),
            reveal: &self.reveal,
            active_tab: self.tabs.active(),
            contact: &self.contact,
            modal: &self.modal,
            downloading: self.resume.is_downloading(),
            notifications: &self.notifications,
            now: self.now,
        })
    }
}
