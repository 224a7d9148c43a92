// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::Gallery;
use crate::ui::gallery_grid;
use crate::ui::notifications;
use crate::ui::slideshow;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Slideshow(slideshow::Message),
    Grid(gallery_grid::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the folder picker.
    FolderPicked(Option<PathBuf>),
    /// Result from async directory scanning, with the photo to open if any.
    GalleryScanned(Result<(Gallery, Option<usize>), Error>),
}

/// What closing the slideshow does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseAction {
    /// Drop the modal and show the grid again.
    #[default]
    ReturnToGallery,
    /// Quit the application.
    Quit,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image file or folder to open on startup.
    pub path: Option<String>,
    /// Address to start on, e.g. `/p/3?photoId=3`.
    pub location: Option<String>,
    /// Auto-advance interval in seconds, overrides the settings file.
    pub interval_secs: Option<u32>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// `None` disables closing (kiosk mode).
    pub close_action: Option<CloseAction>,
}
