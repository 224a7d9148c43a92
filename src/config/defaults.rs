// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Slideshow**: Auto-advance interval bounds and countdown cadence
//! - **Transition**: Slide animation timing
//! - **Gallery**: Thumbnail grid layout

use std::time::Duration;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default auto-advance interval (in seconds).
pub const DEFAULT_SLIDE_INTERVAL_SECS: u32 = 5;

/// Minimum auto-advance interval (in seconds).
pub const MIN_SLIDE_INTERVAL_SECS: u32 = 1;

/// Maximum auto-advance interval (in seconds).
pub const MAX_SLIDE_INTERVAL_SECS: u32 = 60;

/// Period of the on-screen countdown timer.
pub const COUNTDOWN_TICK: Duration = Duration::from_millis(1000);

/// Whether previous/next controls and the filmstrip are shown by default.
pub const DEFAULT_SHOW_NAVIGATION: bool = true;

/// Number of filmstrip thumbnails shown on each side of the current image.
pub const FILMSTRIP_RADIUS: usize = 3;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of the slide-in animation played when the photo changes.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Horizontal distance (in logical pixels) covered by the slide-in animation.
pub const TRANSITION_DISTANCE: f32 = 120.0;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of thumbnail columns in the home grid.
pub const GRID_COLUMNS: usize = 4;

/// Edge length of a grid thumbnail (in logical pixels).
pub const THUMBNAIL_SIZE: f32 = 180.0;

/// Edge length of a filmstrip thumbnail (in logical pixels).
pub const FILMSTRIP_THUMBNAIL_SIZE: f32 = 64.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Period of the tick that drives toast auto-dismiss.
pub const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

const _: () = {
    assert!(MIN_SLIDE_INTERVAL_SECS > 0);
    assert!(DEFAULT_SLIDE_INTERVAL_SECS >= MIN_SLIDE_INTERVAL_SECS);
    assert!(DEFAULT_SLIDE_INTERVAL_SECS <= MAX_SLIDE_INTERVAL_SECS);
    assert!(GRID_COLUMNS > 0);
};
