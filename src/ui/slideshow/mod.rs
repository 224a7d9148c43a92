// SPDX-License-Identifier: MPL-2.0
//! Full-window slideshow modal.
//!
//! Shows one photo of the gallery at a time, advances on its own every
//! [`SlideInterval`] with a visible countdown, and keeps the application
//! address on `/p/<index>?photoId=<index>` while it is open.
//!
//! - [`state`] owns the index, direction, countdown and pause flag
//! - [`subscription`] arms the two timers and the keyboard listener
//! - [`view`] renders the modal from plain [`view::Props`]

pub mod countdown;
pub mod interval;
pub mod state;
pub mod subscription;
pub mod transition;
pub mod view;

pub use interval::SlideInterval;
pub use state::{key_message, Effect, Message, State};

/// Which way the carousel moved, used to pick the slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}
