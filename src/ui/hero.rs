// SPDX-License-Identifier: MPL-2.0
//! Hero section: greeting, name, typed role line and call-to-action buttons.

use crate::content::Profile;
use crate::domain::layout::HERO_HEIGHT;
use crate::domain::navigation::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::section::{brand_text, secondary_text};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
    /// Current text of the typing animation.
    pub typed: String,
    pub downloading: bool,
}

/// Messages emitted by the hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ViewWork,
    GetInTouch,
    DownloadResume,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ScrollTo(Section),
    DownloadResume,
}

/// Process a hero message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ViewWork => Event::ScrollTo(Section::Projects),
        Message::GetInTouch => Event::ScrollTo(Section::Contact),
        Message::DownloadResume => Event::DownloadResume,
    }
}

/// Render the hero section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let name = Text::new(ctx.profile.name.as_str()).size(typography::DISPLAY);

    let typed_line = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(secondary_text(ctx.profile.greeting.as_str(), typography::TITLE_MD, 1.0))
        .push(brand_text(ctx.typed, typography::TITLE_MD, 1.0))
        .push(brand_text("|", typography::TITLE_MD, 1.0));

    let description = Container::new(secondary_text(
        ctx.profile.description.as_str(),
        typography::BODY_LG,
        1.0,
    ))
    .max_width(sizing::MODAL_WIDTH);

    let resume_label = if ctx.downloading {
        ctx.i18n.tr("hero-downloading-resume")
    } else {
        ctx.i18n.tr("hero-download-resume")
    };

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(ctx.i18n.tr("hero-view-work")).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::ViewWork)
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("hero-get-in-touch")).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::GetInTouch)
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(resume_label).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .on_press_maybe((!ctx.downloading).then_some(Message::DownloadResume))
                .style(styles::button::secondary),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(name)
        .push(typed_line)
        .push(description)
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(HERO_HEIGHT))
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::section(false))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_to_action_targets() {
        assert_eq!(update(&Message::ViewWork), Event::ScrollTo(Section::Projects));
        assert_eq!(update(&Message::GetInTouch), Event::ScrollTo(Section::Contact));
        assert_eq!(update(&Message::DownloadResume), Event::DownloadResume);
    }

    #[test]
    fn view_builds_while_downloading() {
        let i18n = I18n::default();
        let profile = Profile::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            profile: &profile,
            typed: "Data".into(),
            downloading: true,
        });
    }
}
