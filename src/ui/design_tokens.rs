// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the grid, the slideshow modal and toasts.
//!
//! Styles in [`crate::ui::styles`] read from here instead of hard-coding
//! colors or sizes.
//!
//! ```
//! use iced_gallery::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::BACKDROP,
//!     ..palette::BLACK
//! };
//! assert!(backdrop.a < 1.0);
//! assert_eq!(spacing::MD, 16.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Secondary text on both light and dark pages.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    /// Thumbnail outline at rest.
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Modal backdrop over the grid.
    pub const BACKDROP: f32 = 0.92;

    /// Filmstrip thumbnails other than the current one.
    pub const FILMSTRIP_INACTIVE: f32 = 0.45;
}

/// 8px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    /// Previous/next hit areas on each side of the photo.
    pub const NAV_BUTTON_WIDTH: f32 = 56.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// App name and empty-state heading.
    pub const TITLE_MD: f32 = 20.0;
    /// Previous/next arrows.
    pub const NAV_GLYPH: f32 = 32.0;
    pub const BODY: f32 = 14.0;
    /// File names, position and countdown badges.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent, current filmstrip thumbnail.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Pill.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS && spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD && spacing::MD < spacing::LG && spacing::LG < spacing::XL);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG && opacity::BACKDROP < opacity::OPAQUE);
    assert!(opacity::FILMSTRIP_INACTIVE > opacity::TRANSPARENT);
    assert!(typography::NAV_GLYPH > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_the_grid() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn nav_button_fits_glyph_with_padding() {
        assert!(sizing::NAV_BUTTON_WIDTH >= sizing::ICON_MD + 2.0 * spacing::MD);
    }
}
