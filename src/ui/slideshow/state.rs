// SPDX-License-Identifier: MPL-2.0
//! Slideshow component state and update logic.
//!
//! The current index is mirrored from the [`Router`]: it is read once when the
//! slideshow opens, and every later change is pushed back to the router with
//! [`State::sync_location`]. Timer messages come from
//! [`super::subscription`], keyed so that a photo change re-arms the
//! auto-advance timer instead of stacking a second one.

use super::countdown::Countdown;
use super::interval::SlideInterval;
use super::transition::Transition;
use super::Direction;
use crate::gallery::Gallery;
use crate::location::{Location, Router};
use iced::{event, keyboard};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// Go to a specific photo (filmstrip, programmatic call).
    ChangePhoto(usize),
    Next,
    Previous,
    /// Auto-advance timer fired.
    AutoAdvance,
    /// Countdown timer fired.
    CountdownTick,
    TogglePause,
    /// One second more between photos.
    SlowerInterval,
    /// One second less between photos.
    FasterInterval,
    CopyLink,
    Close,
    AnimationFrame(Instant),
    RawEvent(event::Event),
}

impl Message {
    /// Close button, backdrop click or Escape.
    #[must_use]
    pub fn is_close_request(&self) -> bool {
        match self {
            Self::Close => true,
            Self::RawEvent(event) => matches!(key_message(event), Some(Self::Close)),
            _ => false,
        }
    }
}

/// Side effects the application performs after a slideshow message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The address went back to `/`; run the close callback if there is one.
    Closed,
    /// Put this address on the clipboard.
    CopyLink(String),
    /// `+` or `-` changed the seconds between photos.
    IntervalChanged(SlideInterval),
}

#[derive(Debug, Clone)]
pub struct State {
    index: usize,
    len: usize,
    generation: u64,
    direction: Direction,
    countdown: Countdown,
    interval: SlideInterval,
    paused: bool,
    transition: Option<Transition>,
}

impl State {
    /// Opens the slideshow on the photo named by the router's current address.
    ///
    /// Returns `None` for an empty gallery. An address without a valid photo
    /// opens the first photo, and the router is updated to match.
    pub fn open(gallery: &Gallery, router: &mut Router, interval: SlideInterval) -> Option<Self> {
        if gallery.is_empty() {
            return None;
        }

        let index = router.photo_index(gallery.len()).unwrap_or_else(|| {
            if let Location::Photo(requested) = router.current() {
                log::warn!(
                    "photo {requested} is out of range for a gallery of {}, showing the first one",
                    gallery.len()
                );
            }
            0
        });

        let state = Self {
            index,
            len: gallery.len(),
            generation: gallery.generation(),
            direction: Direction::Forward,
            countdown: Countdown::new(interval.value()),
            interval,
            paused: false,
            transition: None,
        };
        state.sync_location(router);
        log::debug!("slideshow opened at {}", router.current());
        Some(state)
    }

    pub fn handle(&mut self, message: Message, router: &mut Router) -> Effect {
        match message {
            Message::ChangePhoto(index) => {
                self.change_photo(index, router);
                Effect::None
            }
            Message::Next => {
                if self.index + 1 < self.len {
                    self.change_photo(self.index + 1, router);
                }
                Effect::None
            }
            Message::Previous => {
                if self.index > 0 {
                    self.change_photo(self.index - 1, router);
                }
                Effect::None
            }
            Message::AutoAdvance => {
                log::trace!("auto-advance from {}", self.index);
                let next = (self.index + 1) % self.len;
                self.change_photo(next, router);
                Effect::None
            }
            Message::CountdownTick => {
                self.countdown.tick();
                Effect::None
            }
            Message::TogglePause => {
                self.paused = !self.paused;
                if !self.paused {
                    self.countdown.reset();
                }
                log::debug!("slideshow paused: {}", self.paused);
                Effect::None
            }
            Message::SlowerInterval => {
                self.step_interval(self.interval.value().saturating_add(1))
            }
            Message::FasterInterval => {
                self.step_interval(self.interval.value().saturating_sub(1))
            }
            Message::CopyLink => Effect::CopyLink(Location::Photo(self.index).href()),
            Message::Close => {
                router.push(Location::Home);
                Effect::Closed
            }
            Message::AnimationFrame(now) => {
                if let Some(transition) = self.transition.as_mut() {
                    transition.advance(now);
                    if transition.is_finished() {
                        self.transition = None;
                    }
                }
                Effect::None
            }
            Message::RawEvent(event) => match key_message(&event) {
                Some(message) => self.handle(message, router),
                None => Effect::None,
            },
        }
    }

    fn change_photo(&mut self, index: usize, router: &mut Router) {
        if index >= self.len {
            log::warn!("ignoring photo {index}, gallery has {} images", self.len);
            return;
        }

        self.direction = if index > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = index;
        self.countdown.reset();
        self.transition = Some(Transition::start(Instant::now()));
        self.sync_location(router);
        log::debug!("photo {} ({:?})", self.index, self.direction);
    }

    /// Writes the current photo into the router as a shallow update.
    pub fn sync_location(&self, router: &mut Router) {
        router.replace(Location::Photo(self.index));
    }

    fn step_interval(&mut self, secs: u32) -> Effect {
        let interval = SlideInterval::new(secs);
        if interval == self.interval {
            return Effect::None;
        }
        self.set_interval(interval);
        Effect::IntervalChanged(interval)
    }

    /// Changes the auto-advance interval; the countdown restarts from the new value.
    pub fn set_interval(&mut self, interval: SlideInterval) {
        log::debug!("slide interval {}s", interval.value());
        self.interval = interval;
        self.countdown = Countdown::new(interval.value());
    }

    /// Identity of the auto-advance timer. Any change re-arms it.
    #[must_use]
    pub fn timer_key(&self) -> (usize, u64, u64) {
        (self.index, self.generation, self.interval.as_millis())
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn countdown(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn interval(&self) -> SlideInterval {
        self.interval
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }
}

/// Maps a key press to a slideshow message.
///
/// Arrows navigate, Escape closes, Space pauses, `+`/`-` change the interval
/// and Ctrl/Cmd+C copies the link.
#[must_use]
pub fn key_message(event: &event::Event) -> Option<Message> {
    let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };

    match key.as_ref() {
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::Next),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::Previous),
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Close),
        keyboard::Key::Named(keyboard::key::Named::Space) => Some(Message::TogglePause),
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("c") && modifiers.command() => {
            Some(Message::CopyLink)
        }
        keyboard::Key::Character("+" | "=") => Some(Message::SlowerInterval),
        keyboard::Key::Character("-") => Some(Message::FasterInterval),
        _ => None,
    }
}
