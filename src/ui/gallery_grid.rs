// SPDX-License-Identifier: MPL-2.0
//! Home screen: thumbnail grid of the gallery, or an empty state with a
//! button to pick a folder.

use crate::config::{GRID_COLUMNS, THUMBNAIL_SIZE};
use crate::gallery::{Gallery, ImageRef};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Color, ContentFit, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Open the slideshow on this photo.
    OpenPhoto(usize),
    /// Show the native folder picker.
    OpenFolder,
}

/// `scanning` disables the folder button while a scan is running.
pub fn view<'a>(gallery: &'a Gallery, i18n: &'a I18n, scanning: bool) -> Element<'a, Message> {
    if gallery.is_empty() {
        return empty_state(i18n, scanning);
    }

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("window-title")).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr_with_args(
                "gallery-count",
                &[("count", &gallery.len().to_string())],
            ))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
        )
        .push(Space::new().width(Length::Fill))
        .push(open_folder_button(i18n, scanning));

    let rows = grid_rows(gallery.images()).map(|chunk| -> Element<'a, Message> {
        Row::with_children(chunk.iter().map(thumbnail))
            .spacing(spacing::MD)
            .into()
    });

    let grid = scrollable(
        Container::new(Column::with_children(rows).spacing(spacing::MD))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill);

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(grid),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::page)
    .into()
}

fn grid_rows(images: &[ImageRef]) -> std::slice::Chunks<'_, ImageRef> {
    images.chunks(GRID_COLUMNS)
}

fn thumbnail(image_ref: &ImageRef) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            image(image_ref.handle())
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(THUMBNAIL_SIZE))
                .height(Length::Fixed(THUMBNAIL_SIZE)),
        )
        .push(
            Text::new(image_ref.name.as_str())
                .size(typography::CAPTION)
                .width(Length::Fixed(THUMBNAIL_SIZE))
                .center(),
        );

    button(content)
        .padding(spacing::XXS)
        .on_press(Message::OpenPhoto(image_ref.id))
        .style(styles::button::thumbnail(false))
        .into()
}

fn open_folder_button(i18n: &I18n, scanning: bool) -> Element<'_, Message> {
    let label = if scanning {
        i18n.tr("gallery-scanning")
    } else {
        i18n.tr("gallery-open-folder")
    };

    button(Text::new(label))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe((!scanning).then_some(Message::OpenFolder))
        .into()
}

fn empty_state(i18n: &I18n, scanning: bool) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("gallery-empty-title"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    let hint = Text::new(i18n.tr("gallery-empty-hint"))
        .size(typography::BODY)
        .color(Color {
            a: 0.7,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(hint)
        .push(open_folder_button(i18n, scanning));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::page)
        .into()
}
