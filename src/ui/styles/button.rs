// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button (call to action, form submit).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let pill = Border {
        color: colors.brand_secondary,
        width: 1.0,
        radius: radius::FULL.into(),
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.brand_primary)),
            text_color: WHITE,
            border: pill,
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors.brand_secondary)),
            text_color: WHITE,
            border: pill,
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..colors.brand_primary
            })),
            text_color: Color {
                a: opacity::OVERLAY_HOVER,
                ..WHITE
            },
            border: Border {
                color: Color::TRANSPARENT,
                ..pill
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Outlined brand button; fills on hover.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let border = Border {
        color: colors.brand_primary,
        width: 1.0,
        radius: radius::FULL.into(),
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.brand_primary)),
            text_color: WHITE,
            border,
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Active => button::Style {
            background: None,
            text_color: colors.brand_primary,
            border,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: colors.text_muted,
            border: Border {
                color: colors.text_muted,
                ..border
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Header link; the link of the active section is highlighted.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let text_color = match status {
            _ if active => colors.brand_primary,
            button::Status::Hovered | button::Status::Pressed => colors.brand_secondary,
            _ => colors.text_secondary,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for the selected skill tab.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered => colors.brand_secondary,
        _ => colors.brand_primary,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: colors.brand_secondary,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Style for the other skill tabs.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, border_color, shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (colors.surface_tertiary, colors.brand_primary, shadow::SM)
        }
        _ => (colors.surface_secondary, colors.text_muted, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_primary,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Tab style picker.
pub fn tab(active: bool) -> fn(&Theme, button::Status) -> button::Style {
    if active {
        selected
    } else {
        unselected
    }
}

/// Round glyph button (theme toggle, menu toggle, modal close).
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(colors.surface_tertiary))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
