// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The grid is always rendered; the slideshow is layered on top of it as a
//! modal, and toasts on top of both.

use super::Message;
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::gallery_grid;
use crate::ui::notifications::{self, Toast};
use crate::ui::slideshow::{self, view::Props};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub slideshow: Option<&'a slideshow::State>,
    pub show_navigation: bool,
    /// Whether a close callback was supplied.
    pub closable: bool,
    pub scanning: bool,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let grid = gallery_grid::view(ctx.gallery, ctx.i18n, ctx.scanning).map(Message::Grid);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(grid);

    if let Some(state) = ctx.slideshow {
        let modal = slideshow::view::view(Props {
            index: state.index(),
            direction: state.direction(),
            images: ctx.gallery.images(),
            navigation: ctx.show_navigation,
            interval: state.interval(),
            countdown: state.countdown(),
            paused: state.is_paused(),
            transition: state.transition(),
            on_change: slideshow::Message::ChangePhoto,
            on_close: ctx.closable.then_some(slideshow::Message::Close),
            i18n: ctx.i18n,
        });
        layers = layers.push(modal.map(Message::Slideshow));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
