// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::NOTIFICATION_TICK;
use crate::ui::notifications::{self, NotificationMessage};
use crate::ui::slideshow;
use iced::{time, Subscription};

/// Slideshow timers and keyboard input, only while the slideshow is open.
pub fn create_slideshow_subscription(state: Option<&slideshow::State>) -> Subscription<Message> {
    match state {
        Some(state) => slideshow::subscription::subscription(state).map(Message::Slideshow),
        None => Subscription::none(),
    }
}

/// Periodic tick for toast auto-dismiss, only while toasts are shown.
pub fn create_notification_subscription(
    manager: &notifications::Manager,
) -> Subscription<Message> {
    if manager.has_notifications() {
        time::every(NOTIFICATION_TICK)
            .map(|instant| Message::Notification(NotificationMessage::Tick(instant)))
    } else {
        Subscription::none()
    }
}
