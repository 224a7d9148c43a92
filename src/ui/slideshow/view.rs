// SPDX-License-Identifier: MPL-2.0
//! Presentational view of the slideshow modal.
//!
//! Everything the view needs is passed in [`Props`]; it keeps no state of its
//! own. Clicks on the dimmed backdrop close the modal, clicks on the photo or
//! its controls do not.

use super::interval::SlideInterval;
use super::state::Message;
use super::transition::Transition;
use super::Direction;
use crate::config::{FILMSTRIP_RADIUS, FILMSTRIP_THUMBNAIL_SIZE};
use crate::gallery::ImageRef;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, opaque, Column, Container, Row, Stack, Text};
use iced::{ContentFit, Element, Length, Padding};

pub struct Props<'a> {
    pub index: usize,
    pub direction: Direction,
    pub images: &'a [ImageRef],
    /// Show previous/next buttons and the filmstrip.
    pub navigation: bool,
    pub interval: SlideInterval,
    pub countdown: u32,
    pub paused: bool,
    pub transition: Option<&'a Transition>,
    pub on_change: fn(usize) -> Message,
    /// `None` hides the close button and makes the backdrop inert.
    pub on_close: Option<Message>,
    pub i18n: &'a I18n,
}

pub fn view(props: Props<'_>) -> Element<'_, Message> {
    let Some(current) = props.images.get(props.index) else {
        return Container::new(Text::new("")).into();
    };

    let mut panel = Column::new()
        .spacing(spacing::SM)
        .push(top_bar(&props, current))
        .push(photo_row(&props, current));
    if props.navigation {
        panel = panel.push(filmstrip(&props));
    }

    let backdrop = mouse_area(
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    );
    let backdrop = match props.on_close.clone() {
        Some(message) => backdrop.on_press(message),
        None => backdrop,
    };

    let content = Container::new(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    opaque(Stack::new().push(backdrop).push(content))
}

fn top_bar<'a>(props: &Props<'a>, current: &'a ImageRef) -> Element<'a, Message> {
    let i18n = props.i18n;
    let position = i18n.tr_with_args(
        "slideshow-position",
        &[
            ("current", &(props.index + 1).to_string()),
            ("total", &props.images.len().to_string()),
        ],
    );
    let countdown = if props.paused {
        i18n.tr("slideshow-paused")
    } else {
        i18n.tr_with_args(
            "slideshow-countdown",
            &[
                ("seconds", &props.countdown.to_string()),
                ("interval", &props.interval.value().to_string()),
            ],
        )
    };

    let pause_label = if props.paused {
        i18n.tr("slideshow-resume")
    } else {
        i18n.tr("slideshow-pause")
    };
    let mut bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(badge(position))
        .push(badge(countdown))
        .push(
            Text::new(current.name.as_str())
                .size(typography::CAPTION)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(pause_label).size(typography::BODY))
                .on_press(Message::TogglePause)
                .padding(spacing::XS)
                .style(overlay_button()),
        )
        .push(
            button(Text::new(i18n.tr("slideshow-copy-link")).size(typography::BODY))
                .on_press(Message::CopyLink)
                .padding(spacing::XS)
                .style(overlay_button()),
        );

    if let Some(message) = props.on_close.clone() {
        bar = bar.push(
            button(Text::new("✕").size(typography::BODY))
                .on_press(message)
                .padding(spacing::XS)
                .style(overlay_button()),
        );
    }

    Container::new(bar)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::overlay::controls_container)
        .into()
}

fn overlay_button() -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    styles::button::overlay(WHITE, opacity::OVERLAY_SUBTLE, opacity::OVERLAY_MEDIUM)
}

fn badge<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::FULL))
        .into()
}

fn photo_row<'a>(props: &Props<'a>, current: &'a ImageRef) -> Element<'a, Message> {
    let (offset, alpha) = props
        .transition
        .map_or((0.0, 1.0), |t| (t.offset(props.direction), t.opacity()));

    let photo = Container::new(
        image(current.handle())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(alpha),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(Padding {
        left: offset.max(0.0),
        right: (-offset).max(0.0),
        ..Padding::ZERO
    });

    if !props.navigation {
        return photo.into();
    }

    let last = props.images.len().saturating_sub(1);
    let previous = (props.index > 0).then(|| (props.on_change)(props.index - 1));
    let next = (props.index < last).then(|| (props.on_change)(props.index + 1));

    Row::new()
        .align_y(Vertical::Center)
        .push(nav_button("‹", previous))
        .push(photo)
        .push(nav_button("›", next))
        .into()
}

fn nav_button<'a>(glyph: &'a str, on_press: Option<Message>) -> Element<'a, Message> {
    Container::new(
        button(
            Text::new(glyph).size(typography::NAV_GLYPH).center(),
        )
        .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
        .padding(spacing::SM)
        .on_press_maybe(on_press)
        .style(overlay_button()),
    )
    .height(Length::Fill)
    .align_y(Vertical::Center)
    .into()
}

/// Thumbnails around the current photo.
fn filmstrip<'a>(props: &Props<'a>) -> Element<'a, Message> {
    let (start, end) = filmstrip_window(props.index, props.images.len());

    let thumbnails = props.images[start..end].iter().map(|image_ref| {
        let is_current = image_ref.id == props.index;
        let alpha = if is_current {
            opacity::OPAQUE
        } else {
            opacity::FILMSTRIP_INACTIVE
        };

        button(
            image(image_ref.handle())
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(FILMSTRIP_THUMBNAIL_SIZE))
                .height(Length::Fixed(FILMSTRIP_THUMBNAIL_SIZE))
                .opacity(alpha),
        )
        .padding(spacing::XXS)
        .on_press((props.on_change)(image_ref.id))
        .style(styles::button::thumbnail(is_current))
        .into()
    });

    Container::new(
        Row::with_children(thumbnails)
            .spacing(spacing::XS)
            .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

/// Half-open range of gallery indices shown in the filmstrip.
fn filmstrip_window(index: usize, len: usize) -> (usize, usize) {
    let start = index.saturating_sub(FILMSTRIP_RADIUS);
    let end = (index + FILMSTRIP_RADIUS + 1).min(len);
    (start, end)
}
