// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short-lived messages shown in the bottom-right corner: a warning when the
//! settings file or a bookmarked location cannot be used, a confirmation when
//! the current photo link is copied.
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-link-copied"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
