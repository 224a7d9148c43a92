// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.

use super::{CloseAction, Message};
use crate::config::{self, SortOrder};
use crate::error::Error;
use crate::gallery::Gallery;
use crate::location::{Location, Router};
use crate::ui::gallery_grid;
use crate::ui::notifications::{self, Notification};
use crate::ui::slideshow::{self, Effect, SlideInterval};
use iced::Task;
use std::path::{Path, PathBuf};

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut Gallery,
    pub router: &'a mut Router,
    pub slideshow: &'a mut Option<slideshow::State>,
    pub close_action: Option<CloseAction>,
    pub interval: &'a mut SlideInterval,
    /// Where interval changes are saved; `None` keeps them in memory.
    pub config_dir: Option<&'a Path>,
    pub sort_order: SortOrder,
    pub scanning: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_slideshow_message(
    ctx: &mut UpdateContext<'_>,
    message: slideshow::Message,
) -> Task<Message> {
    let Some(state) = ctx.slideshow.as_mut() else {
        return Task::none();
    };
    if ctx.close_action.is_none() && message.is_close_request() {
        log::debug!("no close action, close request ignored");
        return Task::none();
    }

    match state.handle(message, ctx.router) {
        Effect::None => Task::none(),
        Effect::IntervalChanged(interval) => {
            *ctx.interval = interval;
            save_interval(ctx, interval);
            Task::none()
        }
        Effect::CopyLink(href) => {
            ctx.notifications
                .push(Notification::success("notification-link-copied").with_arg("link", href.clone()));
            iced::clipboard::write(href)
        }
        Effect::Closed => close(ctx),
    }
}

/// Runs the close callback, if the application was given one.
fn close(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.close_action {
        Some(CloseAction::ReturnToGallery) => {
            *ctx.slideshow = None;
            log::debug!("slideshow closed");
            Task::none()
        }
        Some(CloseAction::Quit) => iced::exit(),
        None => Task::none(),
    }
}

/// Writes the new interval to the settings file, keeping its other entries.
fn save_interval(ctx: &mut UpdateContext<'_>, interval: SlideInterval) {
    let Some(dir) = ctx.config_dir else {
        return;
    };
    let (mut settings, warning) = config::load_from_dir(Some(dir.to_path_buf()));
    if warning.is_some() {
        log::warn!("settings unreadable, interval {}s not saved", interval.value());
        return;
    }

    settings.slideshow.interval_secs = Some(interval.value());
    if let Err(err) = config::save_to_dir(&settings, dir) {
        log::warn!("failed to save settings: {err}");
        ctx.notifications.push(
            Notification::warning("notification-config-save-error")
                .with_arg("reason", err.to_string()),
        );
    }
}

pub fn handle_grid_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_grid::Message,
) -> Task<Message> {
    match message {
        gallery_grid::Message::OpenPhoto(index) => {
            ctx.router.push(Location::Photo(index));
            open_slideshow(ctx);
            Task::none()
        }
        gallery_grid::Message::OpenFolder => Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .pick_folder()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            Message::FolderPicked,
        ),
    }
}

pub fn handle_folder_picked(ctx: &mut UpdateContext<'_>, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    log::debug!("scanning {}", path.display());
    *ctx.scanning = true;
    let sort_order = ctx.sort_order;
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || Gallery::open(&path, sort_order))
                .await
                .unwrap_or_else(|err| Err(Error::Io(err.to_string())))
        },
        Message::GalleryScanned,
    )
}

pub fn handle_gallery_scanned(
    ctx: &mut UpdateContext<'_>,
    result: Result<(Gallery, Option<usize>), Error>,
) -> Task<Message> {
    *ctx.scanning = false;

    match result {
        Ok((gallery, start)) => {
            log::info!("gallery replaced with {} images", gallery.len());
            *ctx.gallery = gallery;
            *ctx.slideshow = None;
            if ctx.gallery.is_empty() {
                ctx.notifications
                    .push(Notification::info("notification-empty-folder"));
            }
            match start {
                Some(index) => {
                    ctx.router.push(Location::Photo(index));
                    open_slideshow(ctx);
                }
                None => ctx.router.push(Location::Home),
            }
        }
        Err(err) => {
            log::warn!("folder scan failed: {err}");
            ctx.notifications.push(
                Notification::warning("notification-folder-scan-error")
                    .with_arg("reason", err.to_string()),
            );
        }
    }
    Task::none()
}

/// Mounts the slideshow on the router's current photo.
///
/// When the gallery has nothing to show, the address goes back to `/`.
pub fn open_slideshow(ctx: &mut UpdateContext<'_>) {
    *ctx.slideshow = slideshow::State::open(ctx.gallery, ctx.router, *ctx.interval);
    if ctx.slideshow.is_some() {
        return;
    }

    let requested = ctx.router.current();
    if let Location::Photo(_) = requested {
        log::warn!("no photo to show for {requested}, back to the gallery");
        ctx.notifications.push(
            Notification::warning("notification-photo-unavailable")
                .with_arg("location", requested.href()),
        );
        ctx.router.replace(Location::Home);
    }
}
