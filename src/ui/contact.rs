// SPDX-License-Identifier: MPL-2.0
//! Contact section: contact cards and the message form.

use crate::content::ContactCard;
use crate::domain::contact::{ContactDraft, Field};
use crate::domain::layout::{CONTACT_CARD_HEIGHT, CONTACT_FORM_HEIGHT, ITEM_GAP};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::section::{self, brand_text, secondary_text};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Column, Container, Row, Text},
    Element, Length,
};

/// Height of the message input.
const MESSAGE_INPUT_HEIGHT: f32 = 120.0;

/// Contextual data needed to render the contact section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub cards: &'a [ContactCard],
    pub draft: &'a ContactDraft,
    pub sending: bool,
    /// Fade-in opacity of each card.
    pub alphas: Vec<f32>,
    pub height: f32,
}

/// Messages emitted by the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    FieldChanged(Field, String),
    Submit,
}

/// i18n key of a field label.
#[must_use]
pub fn field_label_key(field: Field) -> &'static str {
    match field {
        Field::Name => "contact-field-name",
        Field::Email => "contact-field-email",
        Field::Subject => "contact-field-subject",
        Field::Message => "contact-field-message",
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let cards = ctx
        .cards
        .iter()
        .zip(ctx.alphas.iter().copied().chain(std::iter::repeat(0.0)))
        .fold(Column::new().spacing(ITEM_GAP), |column, (card, alpha)| {
            column.push(contact_card(card, alpha))
        });

    let body = Row::new()
        .spacing(spacing::XL)
        .push(Container::new(cards).width(Length::FillPortion(2)))
        .push(
            Container::new(form(ctx.i18n, ctx.draft, ctx.sending))
                .width(Length::FillPortion(3))
                .height(Length::Fixed(CONTACT_FORM_HEIGHT)),
        );

    section::frame(
        ctx.i18n.tr("section-contact-title"),
        body.into(),
        ctx.height,
        true,
    )
}

fn contact_card<'a>(card: &'a ContactCard, alpha: f32) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(brand_text(card.icon.as_str(), typography::TITLE_MD, alpha))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(card.label.as_str()).size(typography::BODY))
                .push(secondary_text(card.value.as_str(), typography::BODY, alpha)),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(CONTACT_CARD_HEIGHT))
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .style(styles::container::card(alpha))
        .into()
}

fn form<'a>(i18n: &I18n, draft: &'a ContactDraft, sending: bool) -> Element<'a, Message> {
    let input = |field: Field| {
        let mut input = text_input(&i18n.tr(field_label_key(field)), draft.get(field))
            .padding(spacing::SM)
            .size(typography::BODY_LG);
        if !sending {
            input = input.on_input(move |value| Message::FieldChanged(field, value));
            if field != Field::Message {
                input = input.on_submit(Message::Submit);
            }
        }
        input
    };

    let message = Container::new(input(Field::Message))
        .height(Length::Fixed(MESSAGE_INPUT_HEIGHT))
        .align_y(Vertical::Top);

    let submit_label = if sending {
        i18n.tr("contact-sending")
    } else {
        i18n.tr("contact-send")
    };
    let submit = button(Text::new(submit_label).size(typography::BODY_LG))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::LG])
        .on_press_maybe((!sending).then_some(Message::Submit))
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("contact-form-title")).size(typography::TITLE_SM))
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(input(Field::Name))
                .push(input(Field::Email)),
        )
        .push(input(Field::Subject))
        .push(message)
        .push(submit);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card(1.0))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn every_field_has_a_translated_label() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        for field in Field::ALL {
            let label = i18n.tr(field_label_key(field));
            assert!(!label.starts_with("MISSING"), "{label}");
        }
    }

    #[test]
    fn view_builds_while_sending() {
        let i18n = I18n::default();
        let draft = ContactDraft::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            cards: &[],
            draft: &draft,
            sending: true,
            alphas: Vec::new(),
            height: 700.0,
        });
    }
}
