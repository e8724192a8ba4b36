// SPDX-License-Identifier: MPL-2.0
//! Light and dark modes and the semantic colors each one resolves to.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Semantic colors the style functions draw with.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Page background.
    pub surface_primary: Color,
    /// Cards and the scrolled header.
    pub surface_secondary: Color,
    /// Tracks, tags and inactive tabs.
    pub surface_tertiary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub brand_primary: Color,
    /// Hover and pressed accent.
    pub brand_secondary: Color,
    /// Scrim behind the project modal.
    pub overlay_background: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_50,
            surface_tertiary: palette::GRAY_100,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_muted: palette::GRAY_200,
            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,
            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb8(0x22, 0x26, 0x2e),
            surface_tertiary: Color::from_rgb8(0x2e, 0x33, 0x3d),
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_muted: palette::GRAY_700,
            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,
            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
        }
    }

    /// Scheme for whichever iced theme is being drawn. Style closures only
    /// get the `Theme`, so they come through here.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Which mode the page is in; stored as `theme = "light" | "dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle button glyph: the sun while dark, the moon while light.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Fluent key of the mode's display name.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Light => "theme-mode-light",
            Self::Dark => "theme-mode-dark",
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
        }
    }
}
