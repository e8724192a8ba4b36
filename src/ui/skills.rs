// SPDX-License-Identifier: MPL-2.0
//! Skills section: category tabs and progress bars.

use crate::content::{Skill, SkillCategory};
use crate::domain::layout::{ITEM_GAP, SKILL_ROW_HEIGHT, SKILL_TABS_HEIGHT};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::section::{self, secondary_text};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, progress_bar, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the skills section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub categories: &'a [SkillCategory],
    pub active: usize,
    /// Rendered bar width (percent) of each row of the active category.
    pub widths: Vec<f32>,
    /// Fade-in opacity of each row.
    pub alphas: Vec<f32>,
    pub height: f32,
}

/// Messages emitted by the skills section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectTab(usize),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tabs = ctx
        .categories
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::SM), |row, (index, category)| {
            row.push(
                button(Text::new(category.label.as_str()).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .on_press(Message::SelectTab(index))
                    .style(styles::button::tab(index == ctx.active)),
            )
        });

    let rows = ctx
        .categories
        .get(ctx.active)
        .map(|category| category.skills.as_slice())
        .unwrap_or_default()
        .iter()
        .enumerate()
        .fold(Column::new().spacing(ITEM_GAP), |column, (index, skill)| {
            let width = ctx.widths.get(index).copied().unwrap_or(0.0);
            let alpha = ctx.alphas.get(index).copied().unwrap_or(0.0);
            column.push(skill_row(skill, width, alpha))
        });

    let body = Column::new()
        .spacing(ITEM_GAP)
        .push(
            Container::new(tabs)
                .width(Length::Fill)
                .height(Length::Fixed(SKILL_TABS_HEIGHT))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .push(rows);

    section::frame(
        ctx.i18n.tr("section-skills-title"),
        body.into(),
        ctx.height,
        true,
    )
}

fn skill_row<'a>(skill: &'a Skill, width: f32, alpha: f32) -> Element<'a, Message> {
    let label = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(skill.name.as_str()).size(typography::BODY))
        .push(section::gap(Length::Fill, Length::Shrink))
        .push(secondary_text(
            format!("{:.0}%", skill.level),
            typography::CAPTION,
            alpha,
        ));

    let content = Column::new()
        .spacing(spacing::XS)
        .push(label)
        .push(
            progress_bar(0.0..=100.0, width)
                .girth(sizing::PROGRESS_TRACK)
                .style(styles::progress_bar::skill(alpha)),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(SKILL_ROW_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::faded(alpha))
        .into()
}
