// SPDX-License-Identifier: MPL-2.0
//! Seconds left before the next automatic photo change.

/// On-screen countdown, always within `0..=start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    start: u32,
}

impl Countdown {
    #[must_use]
    pub fn new(start: u32) -> Self {
        Self {
            remaining: start,
            start,
        }
    }

    /// One second elapsed: decrement when positive, otherwise restart.
    pub fn tick(&mut self) {
        if self.remaining > 0 {
            self.remaining -= 1;
        } else {
            self.remaining = self.start;
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.start;
    }

    #[must_use]
    pub fn remaining(self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn start(self) -> u32 {
        self.start
    }
}
