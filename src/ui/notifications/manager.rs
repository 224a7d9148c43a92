// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! Notifications are kept oldest first. The first [`MAX_VISIBLE`] are on
//! screen; the others wait until one of them expires or is dismissed.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check of auto-dismiss deadlines.
    Tick(Instant),
}

#[derive(Debug, Default)]
pub struct Manager {
    entries: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `notification`; warnings and errors are logged as well.
    pub fn push(&mut self, mut notification: Notification) {
        let key = notification.message_key();
        match notification.severity() {
            Severity::Warning => log::warn!("notification: {key}"),
            Severity::Error => log::error!("notification: {key}"),
            Severity::Success | Severity::Info => log::debug!("notification: {key}"),
        }

        if self.entries.len() < MAX_VISIBLE {
            notification.mark_shown(Instant::now());
        }
        self.entries.push_back(notification);
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(position) = self.entries.iter().position(|n| n.id() == id) else {
            return false;
        };
        self.entries.remove(position);
        self.reveal(Instant::now());
        true
    }

    /// Drops visible notifications that expired at `now`.
    pub fn tick(&mut self, now: Instant) {
        let mut position = 0;
        self.entries.retain(|notification| {
            let on_screen = position < MAX_VISIBLE;
            position += 1;
            !(on_screen && notification.is_expired(now))
        });
        self.reveal(now);
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().take(MAX_VISIBLE)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.len().min(MAX_VISIBLE)
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.entries.len().saturating_sub(MAX_VISIBLE)
    }

    /// The tick subscription only runs while this is true.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Starts the timers of notifications that just reached the screen.
    fn reveal(&mut self, now: Instant) {
        for notification in self.entries.iter_mut().take(MAX_VISIBLE) {
            notification.mark_shown(now);
        }
    }
}
