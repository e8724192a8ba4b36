// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by every section of the page.
//!
//! Styles never hard-code a color, size or radius; they pick one of these
//! tokens so both themes and all sections stay in step.
//!
//! ```
//! use iced_portfolio::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color { a: opacity::OVERLAY_STRONG, ..palette::BLACK };
//! let gutter = spacing::LG;
//! # let _ = (scrim, gutter);
//! ```

use iced::Color;

/// Raw colors. Themes map them onto semantic roles in
/// [`crate::ui::theming`].
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Slate ramp, darkest first.
    pub const GRAY_900: Color = Color::from_rgb8(0x17, 0x1a, 0x21);
    pub const GRAY_700: Color = Color::from_rgb8(0x47, 0x4f, 0x5c);
    pub const GRAY_400: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
    pub const GRAY_200: Color = Color::from_rgb8(0xc2, 0xc7, 0xd0);
    pub const GRAY_100: Color = Color::from_rgb8(0xe5, 0xe8, 0xee);
    pub const GRAY_50: Color = Color::from_rgb8(0xf5, 0xf6, 0xf9);

    /// Accent used for links, buttons and progress fills.
    pub const PRIMARY_400: Color = Color::from_rgb8(0x33, 0xb8, 0xbd);
    pub const PRIMARY_500: Color = Color::from_rgb8(0x21, 0x80, 0x8c);
    pub const PRIMARY_600: Color = Color::from_rgb8(0x1c, 0x6b, 0x75);

    pub const ERROR_500: Color = Color::from_rgb8(0xe5, 0x39, 0x35);
    pub const SUCCESS_500: Color = Color::from_rgb8(0x43, 0xb3, 0x67);
    pub const INFO_500: Color = Color::from_rgb8(0x64, 0x96, 0xff);
}

/// Alpha levels for scrims, hover states and the scrolled header.
pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    /// Header background once the page is scrolled.
    pub const SURFACE: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

/// Gaps and paddings, on a 4px step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Fixed component dimensions.
pub mod sizing {
    /// Height of the sticky header; the scrollable page starts below it.
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;
    /// Height of a skill progress track.
    pub const PROGRESS_TRACK: f32 = 8.0;
    pub const TOAST_WIDTH: f32 = 360.0;
    pub const MODAL_WIDTH: f32 = 720.0;
    pub const MODAL_MAX_HEIGHT: f32 = 560.0;
    /// Sections are centered and never wider than this.
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
}

/// Font sizes, largest first.
pub mod typography {
    /// Hero name.
    pub const DISPLAY: f32 = 44.0;
    /// Section headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Typing line, modal title, stat values.
    pub const TITLE_MD: f32 = 22.0;
    /// Card headers.
    pub const TITLE_SM: f32 = 18.0;
    /// Form inputs and emphasized text.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Tags, dates, metric labels.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Outline of focused inputs and the active tab.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Pills: tags, tabs and progress tracks.
    pub const FULL: f32 = 9999.0;
}

/// Elevation levels. Cards rest at `SM`, lift to `MD` and the modal sits at
/// `LG`.
pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const TINT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.25);

    const fn drop(y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: TINT,
            offset: Vector { x: 0.0, y },
            blur_radius,
        }
    }

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };
    pub const SM: Shadow = drop(2.0, 4.0);
    pub const MD: Shadow = drop(4.0, 8.0);
    pub const LG: Shadow = drop(8.0, 16.0);
}

const _: () = {
    assert!(spacing::XXS < spacing::XS && spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD && spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);

    assert!(opacity::TRANSPARENT < opacity::SURFACE && opacity::SURFACE < opacity::OPAQUE);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::MODAL_WIDTH < sizing::CONTENT_MAX_WIDTH);
    assert!(sizing::TOAST_WIDTH < sizing::MODAL_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_four_pixel_step() {
        for value in [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
        ] {
            assert_eq!(value % 4.0, 0.0);
        }
    }

    #[test]
    fn shadows_grow_with_elevation() {
        assert!(shadow::SM.blur_radius < shadow::MD.blur_radius);
        assert!(shadow::MD.blur_radius < shadow::LG.blur_radius);
        assert_eq!(shadow::NONE.color.a, 0.0);
    }
}
