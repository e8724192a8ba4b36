// SPDX-License-Identifier: MPL-2.0
//! Fixed page header.
//!
//! Shows the site name, one link per section and the theme toggle. Below the
//! compact breakpoint the links move into a dropdown behind a menu toggle.

use crate::domain::navigation::{Navigation, Section};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::section::{self, brand_text};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site_name: &'a str,
    pub navigation: &'a Navigation,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    NavigateTo(Section),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    ScrollTo(Section),
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, navigation: &mut Navigation) -> Event {
    match message {
        Message::ToggleMenu => {
            navigation.toggle_menu();
            Event::None
        }
        Message::NavigateTo(section) => {
            navigation.close_menu();
            Event::ScrollTo(section)
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let navigation = ctx.navigation;
    let mut bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand_text(ctx.site_name, typography::TITLE_SM, 1.0))
        .push(section::gap(Length::Fill, Length::Shrink));

    if !navigation.is_compact() {
        for section in Section::ALL {
            bar = bar.push(nav_link(ctx.i18n, navigation, section));
        }
    }

    bar = bar.push(
        button(Text::new(ctx.theme_mode.icon()).size(typography::TITLE_SM))
            .padding([spacing::XXS, spacing::SM])
            .on_press(Message::ToggleTheme)
            .style(styles::button::icon),
    );

    if navigation.is_compact() {
        let glyph = if navigation.is_menu_open() { "✕" } else { "☰" };
        bar = bar.push(section::labelled(
            button(Text::new(glyph).size(typography::TITLE_SM))
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::ToggleMenu)
                .style(styles::button::icon),
            ctx.i18n.tr("nav-menu-toggle"),
        ));
    }

    let header = Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::header(navigation.is_header_scrolled()));

    if navigation.is_compact() && navigation.is_menu_open() {
        let dropdown = Section::ALL.into_iter().fold(
            Column::new().spacing(spacing::XXS),
            |column, section| column.push(nav_link(ctx.i18n, navigation, section)),
        );
        Column::new()
            .push(header)
            .push(
                Container::new(dropdown)
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::container::menu_panel),
            )
            .into()
    } else {
        header.into()
    }
}

fn nav_link<'a>(i18n: &I18n, navigation: &Navigation, section: Section) -> Element<'a, Message> {
    let active = navigation.active_section() == Some(section);
    button(Text::new(i18n.tr(section.label_key())).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::NavigateTo(section))
        .style(styles::button::nav_link(active))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choosing_a_link_closes_the_menu() {
        let mut navigation = Navigation::new();
        navigation.set_window_width(400.0);
        assert_eq!(update(Message::ToggleMenu, &mut navigation), Event::None);
        assert!(navigation.is_menu_open());

        let event = update(Message::NavigateTo(Section::Skills), &mut navigation);
        assert_eq!(event, Event::ScrollTo(Section::Skills));
        assert!(!navigation.is_menu_open());
    }

    #[test]
    fn theme_toggle_is_forwarded() {
        let mut navigation = Navigation::new();
        assert_eq!(
            update(Message::ToggleTheme, &mut navigation),
            Event::ToggleTheme
        );
    }

    #[test]
    fn compact_view_builds_with_open_menu() {
        let i18n = I18n::default();
        let mut navigation = Navigation::new();
        navigation.set_window_width(400.0);
        navigation.toggle_menu();
        let _element = view(ViewContext {
            i18n: &i18n,
            site_name: "Portfolio",
            navigation: &navigation,
            theme_mode: ThemeMode::Dark,
        });
    }
}
