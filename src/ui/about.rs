// SPDX-License-Identifier: MPL-2.0
//! About section with the counted-up headline stats.

use crate::content::{Profile, Stat};
use crate::domain::layout::{ABOUT_TEXT_HEIGHT, ITEM_GAP, STATS_ROW_HEIGHT};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::section::{self, brand_text, secondary_text};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row},
    Element, Length,
};

/// Contextual data needed to render the about section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
    pub stats: &'a [Stat],
    /// Displayed value of each stat counter, parallel to `stats`.
    pub values: Vec<u64>,
    pub height: f32,
}

/// Text shown for a counter: the value, plus the suffix once the target is reached.
#[must_use]
pub fn stat_label(stat: &Stat, value: u64) -> String {
    if value >= stat.target {
        format!("{}{}", stat.target, stat.suffix)
    } else {
        value.to_string()
    }
}

pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let paragraphs = ctx.profile.about.iter().fold(
        Column::new().spacing(spacing::MD),
        |column, paragraph| column.push(secondary_text(paragraph.as_str(), typography::BODY_LG, 1.0)),
    );

    let stats = ctx
        .stats
        .iter()
        .zip(ctx.values.iter().copied().chain(std::iter::repeat(0)))
        .fold(Row::new().spacing(spacing::LG), |row, (stat, value)| {
            let tile = Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(brand_text(stat_label(stat, value), typography::TITLE_LG, 1.0))
                .push(secondary_text(stat.label.as_str(), typography::CAPTION, 1.0));
            row.push(
                Container::new(tile)
                    .width(Length::FillPortion(1))
                    .height(Length::Fill)
                    .padding(spacing::MD)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center)
                    .style(styles::container::card(1.0)),
            )
        });

    let body = Column::new()
        .spacing(ITEM_GAP)
        .push(
            Container::new(paragraphs)
                .width(Length::Fill)
                .height(Length::Fixed(ABOUT_TEXT_HEIGHT)),
        )
        .push(
            Container::new(stats)
                .width(Length::Fill)
                .height(Length::Fixed(STATS_ROW_HEIGHT)),
        );

    section::frame(
        ctx.i18n.tr("section-about-title"),
        body.into(),
        ctx.height,
        true,
    )
}
