// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::fade;
use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Section band; sections alternate between two surfaces.
pub fn section(alternate: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let surface = if alternate {
            colors.surface_secondary
        } else {
            colors.surface_primary
        };
        container::Style {
            background: Some(Background::Color(surface)),
            text_color: Some(colors.text_primary),
            ..Default::default()
        }
    }
}

/// Fixed header. Once the page is scrolled it turns translucent and casts a shadow.
pub fn header(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let (background, shadow) = if scrolled {
            (
                Color {
                    a: opacity::SURFACE,
                    ..colors.surface_primary
                },
                shadow::MD,
            )
        } else {
            (colors.surface_primary, shadow::NONE)
        };
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(colors.text_primary),
            shadow,
            ..Default::default()
        }
    }
}

/// Dropdown panel of the compact menu.
pub fn menu_panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.surface_tertiary,
            width: 1.0,
            radius: 0.0.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Content card, faded by `alpha` while it is revealed.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(fade(colors.surface_primary, alpha))),
            text_color: Some(fade(colors.text_primary, alpha)),
            border: Border {
                color: fade(colors.surface_tertiary, alpha),
                width: 1.0,
                radius: radius::LG.into(),
            },
            shadow: if alpha >= opacity::OPAQUE {
                shadow::SM
            } else {
                shadow::NONE
            },
            ..Default::default()
        }
    }
}

/// Plain area whose text fades with `alpha`.
pub fn faded(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        text_color: Some(fade(ColorScheme::for_theme(theme).text_primary, alpha)),
        ..Default::default()
    }
}

/// Technology tag pill.
pub fn tag(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(fade(
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..colors.brand_primary
                },
                alpha,
            ))),
            text_color: Some(fade(colors.brand_primary, alpha)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Label bubble of icon-only buttons.
pub fn tooltip(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.text_primary)),
        text_color: Some(colors.surface_primary),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the project modal.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.overlay_background)),
        ..Default::default()
    }
}

/// Project modal panel.
pub fn modal(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Metric tile inside the project modal.
pub fn metric(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_alternate_surfaces() {
        let theme = Theme::Light;
        assert_ne!(
            section(false)(&theme).background,
            section(true)(&theme).background
        );
    }

    #[test]
    fn scrolled_header_casts_shadow() {
        let theme = Theme::Dark;
        assert_eq!(header(false)(&theme).shadow, shadow::NONE);
        assert_eq!(header(true)(&theme).shadow, shadow::MD);
    }

    #[test]
    fn hidden_card_is_transparent() {
        let style = card(0.0)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(fade(ColorScheme::light().surface_primary, 0.0)))
        );
        assert_eq!(style.text_color.map(|c| c.a), Some(0.0));
    }

    #[test]
    fn tooltip_inverts_page_colors() {
        let style = tooltip(&Theme::Dark);
        let colors = ColorScheme::dark();
        assert_eq!(style.background, Some(Background::Color(colors.text_primary)));
        assert_eq!(style.text_color, Some(colors.surface_primary));
    }
}
