// SPDX-License-Identifier: MPL-2.0
//! Toast cards stacked in the bottom-right corner of the window.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// One card: severity glyph, localized message and a dismiss button.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new(notification.severity().glyph())
                    .size(typography::TITLE_MD)
                    .color(accent),
            )
            .push(
                Text::new(localized(notification, i18n))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(
                button(Text::new("×").size(typography::BODY))
                    .on_press(Message::Dismiss(notification.id()))
                    .padding(spacing::XXS)
                    .style(dismiss_style),
            );

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent))
            .into()
    }

    /// Layer placed above everything else; empty when nothing is visible.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        if manager.visible_count() == 0 {
            return Space::new().into();
        }

        let cards = manager.visible().map(|notification| Self::view(notification, i18n));

        Container::new(Column::with_children(cards).spacing(spacing::XS))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .into()
    }
}

fn localized(notification: &Notification, i18n: &I18n) -> String {
    let args: Vec<(&str, &str)> = notification
        .message_args()
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    i18n.tr_with_args(notification.message_key(), &args)
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_style(theme: &Theme, status: button::Status) -> button::Style {
    let fill = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: fill.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: theme.palette().text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_border_takes_severity_color() {
        let style = card_style(&Theme::Dark, palette::WARNING_500);
        assert_eq!(style.border.color, palette::WARNING_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_fills_only_on_interaction() {
        assert!(dismiss_style(&Theme::Light, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_style(&Theme::Light, button::Status::Pressed)
            .background
            .is_some());
    }

    #[test]
    fn localized_message_substitutes_arguments() {
        let i18n = I18n::new(Some("en-US".to_string()), &Default::default());
        let notification =
            Notification::success("notification-link-copied").with_arg("link", "/p/1?photoId=1");
        assert_eq!(localized(&notification, &i18n), "Link copied: /p/1?photoId=1");
    }
}
