// SPDX-License-Identifier: MPL-2.0
//! Shared frame of the page sections.
//!
//! Every section is drawn with the heights of [`crate::domain::layout`]:
//! top padding, a title block, the body, bottom padding. Keep the two in sync.

use crate::domain::layout::{SECTION_PADDING, SECTION_TITLE_HEIGHT};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{text, tooltip, Column, Container, Text},
    Element, Length, Theme,
};

/// Wraps `body` in a section of exactly `height` pixels.
pub fn frame<'a, M: 'a>(
    title: String,
    body: Element<'a, M>,
    height: f32,
    alternate: bool,
) -> Element<'a, M> {
    let title = Container::new(
        Text::new(title)
            .size(typography::TITLE_LG)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::for_theme(theme).text_primary),
            }),
    )
    .width(Length::Fill)
    .height(Length::Fixed(SECTION_TITLE_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Top);

    let inner = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(body);

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding([SECTION_PADDING, spacing::LG])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Top)
        .style(styles::container::section(alternate))
        .into()
}

/// Secondary text colored for the current theme, faded by `alpha`.
pub fn secondary_text<'a>(content: impl text::IntoFragment<'a>, size: f32, alpha: f32) -> Text<'a> {
    Text::new(content)
        .size(size)
        .style(move |theme: &Theme| text::Style {
            color: Some(styles::fade(
                ColorScheme::for_theme(theme).text_secondary,
                alpha,
            )),
        })
}

/// Brand-colored text, faded by `alpha`.
pub fn brand_text<'a>(content: impl text::IntoFragment<'a>, size: f32, alpha: f32) -> Text<'a> {
    Text::new(content)
        .size(size)
        .style(move |theme: &Theme| text::Style {
            color: Some(styles::fade(
                ColorScheme::for_theme(theme).brand_primary,
                alpha,
            )),
        })
}

/// Empty element used as flexible or fixed space.
pub fn gap<'a, M: 'a>(width: Length, height: Length) -> Element<'a, M> {
    Container::new(text(""))
        .width(width)
        .height(height)
        .into()
}

/// Names an icon-only control in a tooltip shown while it is hovered.
pub fn labelled<'a, M: 'a>(control: impl Into<Element<'a, M>>, label: String) -> Element<'a, M> {
    tooltip(
        control,
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::tooltip),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS)
    .into()
}
