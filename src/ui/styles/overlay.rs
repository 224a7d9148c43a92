// SPDX-License-Identifier: MPL-2.0
//! Dark translucent surfaces drawn on top of the photo.

use crate::ui::design_tokens::{border, opacity, palette};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

const SURFACE: Color = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

const OUTLINE: Color = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::WHITE
};

/// Outlined pill for the position and countdown badges.
pub fn indicator(corner: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        border: Border {
            color: OUTLINE,
            width: border::WIDTH_SM,
            radius: corner.into(),
        },
        ..controls_container(theme)
    }
}

/// Top bar of the slideshow.
#[must_use]
pub fn controls_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
