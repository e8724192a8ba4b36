// SPDX-License-Identifier: MPL-2.0
//! Project cards and the project details modal.

use crate::domain::catalog::{Catalog, DescriptionSection, Project};
use crate::domain::layout::{ITEM_GAP, PROJECT_CARD_HEIGHT, PROJECT_COLUMNS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::experience::tag_row;
use crate::ui::section::{self, brand_text, secondary_text};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font, mouse,
    widget::{
        button, center, mouse_area, opaque, scrollable, Column, Container, Row, Stack, Text,
    },
    Element, Font, Length,
};

/// Metric tiles per row in the modal.
const METRIC_COLUMNS: usize = 4;

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Contextual data needed to render the project cards.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    /// Fade-in opacity of each card, in catalog order.
    pub alphas: Vec<f32>,
    pub height: f32,
}

/// Messages emitted by the cards and the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open(String),
    Close,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let projects: Vec<&Project> = ctx.catalog.iter().collect();
    let mut alphas = ctx.alphas.iter().copied().chain(std::iter::repeat(0.0));

    let rows = projects
        .chunks(PROJECT_COLUMNS)
        .fold(Column::new().spacing(ITEM_GAP), |column, chunk| {
            let mut row = Row::new()
                .spacing(ITEM_GAP)
                .height(Length::Fixed(PROJECT_CARD_HEIGHT));
            for &project in chunk {
                let alpha = alphas.next().unwrap_or(0.0);
                row = row.push(card(ctx.i18n, project, alpha));
            }
            // Keep a lone card at column width.
            for _ in chunk.len()..PROJECT_COLUMNS {
                row = row.push(section::gap(Length::FillPortion(1), Length::Fill));
            }
            column.push(row)
        });

    section::frame(
        ctx.i18n.tr("section-projects-title"),
        rows.into(),
        ctx.height,
        false,
    )
}

fn card<'a>(i18n: &I18n, project: &'a Project, alpha: f32) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(project.title.as_str()).size(typography::TITLE_SM))
        .push(
            Container::new(secondary_text(project.summary.as_str(), typography::BODY, alpha))
                .height(Length::Fill),
        )
        .push(tag_row(&project.technologies, alpha))
        .push(
            button(Text::new(i18n.tr("project-view-details")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::Open(project.key.clone()))
                .style(styles::button::secondary),
        );

    mouse_area(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::card(alpha)),
    )
    .on_press(Message::Open(project.key.clone()))
    .interaction(mouse::Interaction::Pointer)
    .into()
}

/// Layers the details of `project` over `base`.
///
/// Clicking the backdrop closes the modal; clicks on the panel do not. The
/// layer is opaque, so the page underneath receives neither clicks nor
/// wheel scrolling while it is shown.
pub fn modal<'a, M: 'a>(
    base: Element<'a, M>,
    i18n: &I18n,
    project: &'a Project,
    on_message: fn(Message) -> M,
) -> Element<'a, M> {
    let overlay: Element<'a, Message> = mouse_area(
        center(opaque(panel(i18n, project)))
            .padding(spacing::XL)
            .style(styles::container::backdrop),
    )
    .on_press(Message::Close)
    .into();

    Stack::new()
        .push(base)
        .push(opaque(overlay.map(on_message)))
        .into()
}

fn panel<'a>(i18n: &I18n, project: &'a Project) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(project.title.as_str()).size(typography::TITLE_MD))
        .push(section::gap(Length::Fill, Length::Shrink))
        .push(section::labelled(
            button(Text::new("×").size(typography::TITLE_MD))
                .padding([0.0, spacing::SM])
                .on_press(Message::Close)
                .style(styles::button::icon),
            i18n.tr("modal-close"),
        ));

    let mut body = Column::new()
        .spacing(spacing::LG)
        .push(secondary_text(project.overview.as_str(), typography::BODY_LG, 1.0));
    for block in &project.sections {
        body = body.push(description_block(block));
    }
    body = body
        .push(Text::new(i18n.tr("modal-metrics")).size(typography::TITLE_SM))
        .push(metrics_grid(project))
        .push(Text::new(i18n.tr("modal-technologies")).size(typography::TITLE_SM))
        .push(tag_row(&project.technologies, 1.0));

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(scrollable(body.padding([0.0, spacing::XS])).height(Length::Fill));

    Container::new(content)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .max_height(sizing::MODAL_MAX_HEIGHT)
        .padding(spacing::LG)
        .style(styles::container::modal)
        .into()
}

fn description_block(block: &DescriptionSection) -> Element<'_, Message> {
    block.items.iter().fold(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(block.heading.as_str()).size(typography::TITLE_SM)),
        |column, item| {
            let mut line = Row::new().spacing(spacing::XXS).push(Text::new("•"));
            if let Some(label) = &item.label {
                line = line.push(Text::new(format!("{label}:")).font(BOLD));
            }
            column.push(line.push(secondary_text(item.text.as_str(), typography::BODY, 1.0)))
        },
    )
    .into()
}

fn metrics_grid(project: &Project) -> Element<'_, Message> {
    project
        .metrics
        .chunks(METRIC_COLUMNS)
        .fold(Column::new().spacing(spacing::SM), |column, chunk| {
            let row = chunk.iter().fold(Row::new().spacing(spacing::SM), |row, metric| {
                row.push(
                    Container::new(
                        Column::new()
                            .align_x(Horizontal::Center)
                            .push(brand_text(metric.value.as_str(), typography::TITLE_MD, 1.0))
                            .push(secondary_text(metric.label.as_str(), typography::CAPTION, 1.0)),
                    )
                    .width(Length::FillPortion(1))
                    .padding(spacing::SM)
                    .align_x(Horizontal::Center)
                    .style(styles::container::metric),
                )
            });
            column.push(row)
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::sample_project;
    use iced::advanced::renderer::Headless;
    use iced::advanced::widget::Tree;
    use iced::advanced::{clipboard, layout, Layout, Shell};
    use iced::{Event, Pixels, Point, Rectangle, Size};

    const WINDOW: Size = Size::new(1280.0, 800.0);

    async fn software_renderer() -> iced::Renderer {
        <iced::Renderer as Headless>::new(Font::DEFAULT, Pixels(16.0), Some("tiny-skia"))
            .await
            .expect("tiny-skia renderer")
    }

    /// Lays `element` out in `bounds` and presses then releases the left
    /// button at `at`, returning what it published.
    fn click(
        mut element: Element<'_, Message>,
        renderer: &iced::Renderer,
        bounds: Size,
        at: Point,
    ) -> Vec<Message> {
        let mut tree = Tree::new(element.as_widget());
        let node = element.as_widget_mut().layout(
            &mut tree,
            renderer,
            &layout::Limits::new(Size::ZERO, bounds),
        );
        let cursor = mouse::Cursor::Available(at);
        let viewport = Rectangle::with_size(bounds);
        let mut messages = Vec::new();

        for event in [
            mouse::Event::ButtonPressed(mouse::Button::Left),
            mouse::Event::ButtonReleased(mouse::Button::Left),
        ] {
            let mut shell = Shell::new(&mut messages);
            element.as_widget_mut().update(
                &mut tree,
                &Event::Mouse(event),
                Layout::new(&node),
                cursor,
                renderer,
                &mut clipboard::Null,
                &mut shell,
                &viewport,
            );
        }
        messages
    }

    fn layered<'a>(i18n: &I18n, project: &'a Project) -> Element<'a, Message> {
        modal(section::gap(Length::Fill, Length::Fill), i18n, project, |message| message)
    }

    #[tokio::test]
    async fn backdrop_click_closes_modal() {
        let renderer = software_renderer().await;
        let i18n = I18n::default();
        let project = sample_project("a", 4);

        let messages = click(layered(&i18n, &project), &renderer, WINDOW, Point::new(4.0, 4.0));

        assert_eq!(messages, vec![Message::Close]);
    }

    #[tokio::test]
    async fn panel_click_keeps_modal_open() {
        let renderer = software_renderer().await;
        let i18n = I18n::default();
        let project = sample_project("a", 4);
        let center = Point::new(WINDOW.width / 2.0, WINDOW.height / 2.0);

        let messages = click(layered(&i18n, &project), &renderer, WINDOW, center);

        assert!(messages.is_empty(), "{messages:?}");
    }

    #[tokio::test]
    async fn clicking_anywhere_on_card_opens_project() {
        let renderer = software_renderer().await;
        let i18n = I18n::default();
        let project = sample_project("a", 4);
        let bounds = Size::new(400.0, PROJECT_CARD_HEIGHT);

        // Inside the card padding, away from the details button.
        let messages = click(card(&i18n, &project, 1.0), &renderer, bounds, Point::new(4.0, 4.0));

        assert_eq!(messages, vec![Message::Open("a".to_string())]);
    }

    #[test]
    fn views_build_without_window() {
        let i18n = I18n::default();
        let catalog = Catalog::new(vec![
            sample_project("a", 4),
            sample_project("b", 2),
            sample_project("c", 3),
        ]);
        let cards = view(ViewContext {
            i18n: &i18n,
            catalog: &catalog,
            alphas: vec![1.0, 0.5],
            height: 900.0,
        });
        let project = catalog.get("a").expect("known project");
        let _layered = modal(cards, &i18n, project, |message| message);
    }
}
