// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the page widgets.
//!
//! Style functions read colors from [`ColorScheme::for_theme`] so they follow
//! the light/dark toggle without being rebuilt.
//!
//! [`ColorScheme::for_theme`]: crate::ui::theming::ColorScheme::for_theme

pub mod button;
pub mod container;
pub mod progress_bar;

use iced::Color;

/// Scales the alpha of `color` by `alpha`, clamped to `0.0..=1.0`.
#[must_use]
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_scales_alpha() {
        let faded = fade(Color::WHITE, 0.5);
        assert_eq!(faded.a, 0.5);
        assert_eq!(faded.r, Color::WHITE.r);
        assert_eq!(fade(Color::WHITE, 3.0).a, 1.0);
    }
}
