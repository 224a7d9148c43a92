// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and the slideshow.
//!
//! The `App` struct owns the gallery, the router holding the current address
//! and the optional slideshow modal, and translates component effects into
//! tasks such as clipboard writes, folder scans or quitting.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{CloseAction, Flags, Message};

use crate::config::{self, SortOrder, DEFAULT_SHOW_NAVIGATION, DEFAULT_SLIDE_INTERVAL_SECS};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::location::{Location, Router};
use crate::ui::notifications::{self, Notification};
use crate::ui::slideshow::{self, SlideInterval};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: Gallery,
    router: Router,
    /// Open modal, `None` while the grid is shown.
    slideshow: Option<slideshow::State>,
    /// Close callback of the modal; `None` means the modal cannot be dismissed.
    close_action: Option<CloseAction>,
    interval: SlideInterval,
    /// Settings directory that interval changes are saved to.
    config_dir: Option<PathBuf>,
    show_navigation: bool,
    sort_order: SortOrder,
    theme_mode: ThemeMode,
    /// A folder scan is running.
    scanning: bool,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("location", &self.router.current())
            .field("images", &self.gallery.len())
            .field("slideshow_open", &self.slideshow.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot; flags are consumed on the first call only.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: Gallery::default(),
            router: Router::default(),
            slideshow: None,
            close_action: Some(CloseAction::ReturnToGallery),
            interval: SlideInterval::default(),
            config_dir: None,
            show_navigation: DEFAULT_SHOW_NAVIGATION,
            sort_order: SortOrder::default(),
            theme_mode: ThemeMode::System,
            scanning: false,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from the settings file and the CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            close_action: flags.close_action,
            theme_mode: config.general.theme_mode,
            interval: SlideInterval::new(
                flags
                    .interval_secs
                    .or(config.slideshow.interval_secs)
                    .unwrap_or(DEFAULT_SLIDE_INTERVAL_SECS),
            ),
            show_navigation: config
                .slideshow
                .show_navigation
                .unwrap_or(DEFAULT_SHOW_NAVIGATION),
            sort_order: config.slideshow.sort_order.unwrap_or_default(),
            config_dir: paths::get_app_config_dir(),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let requested = flags.location.as_deref().and_then(|raw| {
            Location::parse(raw)
                .map_err(|err| {
                    log::warn!("ignoring --location {raw}: {err}");
                    app.notifications
                        .push(Notification::warning(err.i18n_key()).with_arg("location", raw));
                })
                .ok()
        });

        let mut start = None;
        if let Some(path) = flags.path.as_deref() {
            match Gallery::open(Path::new(path), app.sort_order) {
                Ok((gallery, index)) => {
                    log::info!("opened {path} with {} images", gallery.len());
                    app.gallery = gallery;
                    start = index;
                }
                Err(err) => {
                    log::warn!("failed to open {path}: {err}");
                    app.notifications.push(
                        Notification::warning("notification-scan-error")
                            .with_arg("path", path)
                            .with_arg("reason", err.to_string()),
                    );
                }
            }
        }

        app.start_at(requested.or(start.map(Location::Photo)));

        (app, Task::none())
    }

    /// Sets the first address and opens the slideshow if it names a photo.
    fn start_at(&mut self, initial: Option<Location>) {
        if let Some(location) = initial {
            self.router = Router::new(location);
        }
        if matches!(self.router.current(), Location::Photo(_)) {
            self.open_slideshow();
        }
    }

    fn open_slideshow(&mut self) {
        let mut ctx = self.update_context();
        update::open_slideshow(&mut ctx);
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.router.current() {
            Location::Home => app_name,
            location => format!("{} - {app_name}", location.href()),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_slideshow_subscription(self.slideshow.as_ref()),
            subscription::create_notification_subscription(&self.notifications),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            gallery: &mut self.gallery,
            router: &mut self.router,
            slideshow: &mut self.slideshow,
            close_action: self.close_action,
            interval: &mut self.interval,
            config_dir: self.config_dir.as_deref(),
            sort_order: self.sort_order,
            scanning: &mut self.scanning,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Slideshow(slideshow_message) => {
                update::handle_slideshow_message(&mut ctx, slideshow_message)
            }
            Message::Grid(grid_message) => update::handle_grid_message(&mut ctx, grid_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::FolderPicked(path) => update::handle_folder_picked(&mut ctx, path),
            Message::GalleryScanned(result) => update::handle_gallery_scanned(&mut ctx, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            slideshow: self.slideshow.as_ref(),
            show_navigation: self.show_navigation,
            closable: self.close_action.is_some(),
            scanning: self.scanning,
            notifications: &self.notifications,
        })
    }
}
