// SPDX-License-Identifier: MPL-2.0
//! View composition for the application.
//!
//! The header stays fixed above a single scrollable holding every section at
//! the height [`PageLayout`] assigns it, so what the observers compute and what
//! is drawn agree. The project modal and the toast are stacked on top.

use super::update::PAGE_SCROLLABLE_ID;
use super::{Message, PageReveal};
use crate::content::SiteContent;
use crate::domain::catalog::Catalog;
use crate::domain::contact::ContactForm;
use crate::domain::layout::{PageItem, PageLayout};
use crate::domain::modal::ProjectModal;
use crate::domain::navigation::{Navigation, Section};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Presenter, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::{about, contact, experience, hero, navbar, projects, skills, styles};
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Everything the page needs to render one frame.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub content: &'a SiteContent,
    pub catalog: &'a Catalog,
    pub layout: &'a PageLayout,
    pub navigation: &'a Navigation,
    pub typed: String,
    pub reveal: &'a PageReveal,
    pub active_tab: usize,
    pub contact: &'a ContactForm,
    pub modal: &'a ProjectModal,
    pub downloading: bool,
    pub notifications: &'a Presenter,
    pub now: Instant,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let base = page(&ctx);

    let base = match ctx.modal.project(ctx.catalog) {
        Some(project) => projects::modal(base, ctx.i18n, project, Message::Projects),
        None => base,
    };

    let toast =
        Toast::view_overlay(ctx.notifications, ctx.i18n, ctx.now).map(Message::Notification);

    Stack::new().push(base).push(toast).into()
}

fn page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let content = ctx.content;
    let layout = ctx.layout;
    let reveal = ctx.reveal;
    let now = ctx.now;

    let header = navbar::view(navbar::ViewContext {
        i18n,
        site_name: content.profile.name.as_str(),
        navigation: ctx.navigation,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let hero = hero::view(hero::ViewContext {
        i18n,
        profile: &content.profile,
        typed: ctx.typed.clone(),
        downloading: ctx.downloading,
    })
    .map(Message::Hero);

    let about: Element<'a, Message> = about::view(about::ViewContext {
        i18n,
        profile: &content.profile,
        stats: &content.stats,
        values: reveal.counter_values(now),
        height: layout.section_height(Section::About),
    });

    let experience: Element<'a, Message> = experience::view(experience::ViewContext {
        i18n,
        entries: &content.experience,
        alphas: reveal.alphas(content.experience.len(), PageItem::Timeline, now),
        height: layout.section_height(Section::Experience),
    });

    let skills = skills::view(skills::ViewContext {
        i18n,
        categories: &content.skills,
        active: ctx.active_tab,
        widths: reveal.widths(ctx.active_tab, now),
        alphas: reveal.alphas(layout.skill_rows().len(), PageItem::SkillRow, now),
        height: layout.section_height(Section::Skills),
    })
    .map(Message::Skills);

    let projects = projects::view(projects::ViewContext {
        i18n,
        catalog: ctx.catalog,
        alphas: reveal.alphas(ctx.catalog.len(), PageItem::Project, now),
        height: layout.section_height(Section::Projects),
    })
    .map(Message::Projects);

    let contact = contact::view(contact::ViewContext {
        i18n,
        cards: &content.contact,
        draft: ctx.contact.draft(),
        sending: ctx.contact.is_sending(),
        alphas: reveal.alphas(content.contact.len(), PageItem::ContactCard, now),
        height: layout.section_height(Section::Contact),
    })
    .map(Message::Contact);

    let sections = Column::new()
        .width(Length::Fill)
        .push(hero)
        .push(about)
        .push(experience)
        .push(skills)
        .push(projects)
        .push(contact);

    let scroll = Scrollable::new(sections)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset: viewport.absolute_offset().y,
            height: viewport.bounds().height,
        });

    Container::new(Column::new().push(header).push(scroll))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
