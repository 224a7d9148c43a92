// SPDX-License-Identifier: MPL-2.0
//! Slide-in animation played after a photo change.

use super::Direction;
use crate::config::{TRANSITION_DISTANCE, TRANSITION_DURATION};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    started_at: Instant,
    now: Instant,
}

impl Transition {
    #[must_use]
    pub fn start(now: Instant) -> Self {
        Self {
            started_at: now,
            now,
        }
    }

    /// Records a new animation frame.
    pub fn advance(&mut self, now: Instant) {
        self.now = now.max(self.started_at);
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let elapsed = self.now.duration_since(self.started_at);
        (elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Horizontal offset of the incoming photo. Forward slides in from the right.
    #[must_use]
    pub fn offset(&self, direction: Direction) -> f32 {
        let remaining = 1.0 - ease_out(self.progress());
        match direction {
            Direction::Forward => remaining * TRANSITION_DISTANCE,
            Direction::Backward => -remaining * TRANSITION_DISTANCE,
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        ease_out(self.progress())
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
