// SPDX-License-Identifier: MPL-2.0
//! Auto-advance interval.

use crate::config::{
    DEFAULT_SLIDE_INTERVAL_SECS, MAX_SLIDE_INTERVAL_SECS, MIN_SLIDE_INTERVAL_SECS,
};
use std::time::Duration;

/// Seconds between two automatic photo changes, always within 1–60.
///
/// ```
/// use iced_gallery::ui::slideshow::SlideInterval;
///
/// assert_eq!(SlideInterval::new(5).value(), 5);
/// assert_eq!(SlideInterval::new(0).value(), 1);
/// assert_eq!(SlideInterval::new(600).value(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideInterval(u32);

impl SlideInterval {
    /// Clamps `secs` to the valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_SLIDE_INTERVAL_SECS, MAX_SLIDE_INTERVAL_SECS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::from(self.0) * 1000
    }
}

impl Default for SlideInterval {
    fn default() -> Self {
        Self(DEFAULT_SLIDE_INTERVAL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_seconds() {
        assert_eq!(SlideInterval::default().as_duration(), Duration::from_millis(5000));
        assert_eq!(SlideInterval::default().as_millis(), 5000);
    }

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(SlideInterval::new(0).value(), MIN_SLIDE_INTERVAL_SECS);
        assert_eq!(SlideInterval::new(1000).value(), MAX_SLIDE_INTERVAL_SECS);
        assert_eq!(SlideInterval::new(12).value(), 12);
    }
}
