// SPDX-License-Identifier: MPL-2.0
//! Experience timeline.

use crate::content::TimelineEntry;
use crate::domain::layout::{ITEM_GAP, TIMELINE_ITEM_HEIGHT};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::section::{self, brand_text, secondary_text};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the timeline.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entries: &'a [TimelineEntry],
    /// Fade-in opacity of each entry.
    pub alphas: Vec<f32>,
    pub height: f32,
}

pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let items = ctx
        .entries
        .iter()
        .zip(ctx.alphas.iter().copied().chain(std::iter::repeat(0.0)))
        .fold(Column::new().spacing(ITEM_GAP), |column, (entry, alpha)| {
            column.push(timeline_item(entry, alpha))
        });

    section::frame(
        ctx.i18n.tr("section-experience-title"),
        items.into(),
        ctx.height,
        false,
    )
}

/// Technology tags; also used by the project cards.
pub fn tag_row<'a, M: 'a>(tags: &'a [String], alpha: f32) -> Row<'a, M> {
    tags.iter().fold(Row::new().spacing(spacing::XS), |row, tag| {
        row.push(
            Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::tag(alpha)),
        )
    })
}

fn timeline_item<'a, M: 'a>(entry: &'a TimelineEntry, alpha: f32) -> Element<'a, M> {
    let heading = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(entry.role.as_str()).size(typography::TITLE_SM))
        .push(section::gap(Length::Fill, Length::Shrink))
        .push(brand_text(entry.period.as_str(), typography::CAPTION, alpha));

    let content = Column::new()
        .spacing(spacing::XS)
        .push(heading)
        .push(brand_text(entry.company.as_str(), typography::BODY, alpha))
        .push(secondary_text(entry.description.as_str(), typography::BODY, alpha))
        .push(tag_row(&entry.tags, alpha));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(TIMELINE_ITEM_HEIGHT))
        .padding(spacing::LG)
        .style(styles::container::card(alpha))
        .into()
}
