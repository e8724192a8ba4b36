// SPDX-License-Identifier: MPL-2.0
//! Progress bar styles.

use super::fade;
use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::progress_bar;
use iced::{Background, Border, Theme};

/// Skill level bar: a pill track filled with the brand color, faded with its
/// row.
pub fn skill(alpha: f32) -> impl Fn(&Theme) -> progress_bar::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        progress_bar::Style {
            background: Background::Color(fade(colors.surface_tertiary, alpha)),
            bar: Background::Color(fade(colors.brand_primary, alpha)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_bar_fills_with_brand_color() {
        let style = skill(1.0)(&Theme::Dark);
        assert_eq!(
            style.bar,
            Background::Color(ColorScheme::dark().brand_primary)
        );
        assert_eq!(
            style.background,
            Background::Color(ColorScheme::dark().surface_tertiary)
        );
    }

    #[test]
    fn hidden_row_hides_its_bar() {
        let style = skill(0.0)(&Theme::Light);
        let Background::Color(bar) = style.bar else {
            panic!("bar should be a flat color");
        };
        assert_eq!(bar.a, 0.0);
    }
}
