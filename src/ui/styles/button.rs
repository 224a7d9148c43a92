// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action, e.g. the "Open folder" button of the empty gallery.
///
/// Disabled while a folder scan is running.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (fill, outline, text_color, elevation) = match status {
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, WHITE, shadow::SM)
        }
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, WHITE, shadow::MD),
        button::Status::Disabled => (
            palette::GRAY_200,
            palette::GRAY_400,
            palette::GRAY_400,
            shadow::NONE,
        ),
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: outline,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Translucent buttons drawn over the photo (previous/next, top bar).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            button::Status::Disabled => opacity::TRANSPARENT,
            button::Status::Active => alpha_normal,
        };
        let text_color = if status == button::Status::Disabled {
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..text_color
            }
        } else {
            text_color
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Gallery grid and filmstrip thumbnails; `current` draws the brand outline.
pub fn thumbnail(current: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let outline = match (current, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::PRIMARY_400,
            (false, _) => Color::TRANSPARENT,
        };

        button::Style {
            background: None,
            text_color: theme.palette().text,
            border: Border {
                color: outline,
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_greys_out_while_disabled() {
        let active = primary(&Theme::Dark, button::Status::Active);
        let disabled = primary(&Theme::Dark, button::Status::Disabled);

        assert_eq!(active.background, Some(Background::Color(palette::PRIMARY_500)));
        assert_eq!(disabled.background, Some(Background::Color(palette::GRAY_200)));
        assert_eq!(disabled.shadow.blur_radius, 0.0);
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let style_fn = overlay(WHITE, 0.5, 0.8);

        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn disabled_overlay_button_dims_its_glyph() {
        let style = overlay(WHITE, 0.5, 0.8)(&Theme::Dark, button::Status::Disabled);
        assert!(style.text_color.a < WHITE.a);
    }

    #[test]
    fn current_thumbnail_is_outlined() {
        let current = thumbnail(true)(&Theme::Light, button::Status::Active);
        let other = thumbnail(false)(&Theme::Light, button::Status::Active);

        assert_eq!(current.border.color, palette::PRIMARY_500);
        assert_eq!(other.border.color, Color::TRANSPARENT);
    }
}
