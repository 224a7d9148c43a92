// SPDX-License-Identifier: MPL-2.0
//! Timers and input listeners of an open slideshow.
//!
//! Dropping a subscription cancels it, so closing the slideshow or pausing it
//! stops both timers without any explicit teardown.

use super::state::{Message, State};
use crate::config::COUNTDOWN_TICK;
use iced::{event, time, window, Subscription};

/// All subscriptions needed while `state` is on screen.
pub fn subscription(state: &State) -> Subscription<Message> {
    let animation = if state.transition().is_some() {
        window::frames().map(Message::AnimationFrame)
    } else {
        Subscription::none()
    };

    if state.is_paused() {
        return Subscription::batch([keyboard(), animation]);
    }

    Subscription::batch([keyboard(), auto_advance(state), countdown(), animation])
}

/// Fires once per interval. Keyed on the index, the gallery and the interval
/// so the timer restarts from zero whenever one of them changes.
fn auto_advance(state: &State) -> Subscription<Message> {
    time::every(state.interval().as_duration())
        .with(state.timer_key())
        .map(|(_key, _instant)| Message::AutoAdvance)
}

/// Independent one-second tick; photo changes do not re-arm it.
fn countdown() -> Subscription<Message> {
    time::every(COUNTDOWN_TICK).map(|_| Message::CountdownTick)
}

fn keyboard() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match (&event, status) {
        (event::Event::Keyboard(_), event::Status::Ignored) => Some(Message::RawEvent(event)),
        _ => None,
    })
}
