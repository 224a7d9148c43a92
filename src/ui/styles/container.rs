// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette::BLACK};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Full-window backdrop behind the slideshow modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Plain window background for the gallery grid.
pub fn page(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent_black() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert_eq!(color.r, 0.0);
                assert!(color.a < 1.0);
            }
            other => panic!("expected color background, got {other:?}"),
        }
    }
}
