// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the visible notification.
//!
//! The toast sits in the bottom-right corner. While sliding it fades and
//! moves up by [`SLIDE_DISTANCE`].

use super::notification::Notification;
use super::presenter::{Message, Presenter};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::section;
use crate::ui::styles::fade;
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Vertical travel of the slide animation.
const SLIDE_DISTANCE: f32 = spacing::LG;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Resolves the notification text through i18n.
    #[must_use]
    pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
        if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        }
    }

    /// Renders a single toast at `alpha` opacity.
    pub fn view<'a>(notification: &Notification, i18n: &I18n, alpha: f32) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = fade(severity.color(), alpha);

        let glyph = Text::new(severity.glyph())
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message_widget = Text::new(Self::message_text(notification, i18n))
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, alpha)),
            });

        let dismiss_button = button(Text::new("×").size(typography::TITLE_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XS])
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(section::labelled(
                dismiss_button,
                i18n.tr("notification-dismiss"),
            ));

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha))
            .into()
    }

    /// Renders the toast overlay for the presenter's current notification.
    pub fn view_overlay<'a>(
        presenter: &Presenter,
        i18n: &I18n,
        now: Instant,
    ) -> Element<'a, Message> {
        let Some(notification) = presenter.visible() else {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let progress = presenter.slide_progress(now);
        Container::new(Self::view(notification, i18n, progress))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(iced::Padding {
                top: spacing::MD,
                right: spacing::MD,
                bottom: spacing::MD + SLIDE_DISTANCE * progress,
                left: spacing::MD,
            })
            .into()
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, alpha))),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if alpha > opacity::OVERLAY_MEDIUM {
            shadow::MD
        } else {
            shadow::NONE
        },
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = fade(theme.extended_palette().background.base.text, alpha);
    let hover = |a: f32| {
        Some(iced::Background::Color(fade(
            Color { a, ..palette::GRAY_400 },
            alpha,
        )))
    };

    let background = match status {
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, 1.0);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn message_text_interpolates_arguments() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let notification =
            Notification::info("notification-theme-switched").with_arg("mode", "dark");
        assert_eq!(
            Toast::message_text(&notification, &i18n),
            "Switched to dark mode"
        );
    }
}
