// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: state
//! lives in plain structs, views are functions of that state, and side effects
//! are reported back to the application as `Effect` values.
//!
//! - [`gallery_grid`] - Home screen thumbnail grid and empty state
//! - [`slideshow`] - Full-window modal carousel with timers and keyboard navigation
//! - [`notifications`] - Toast notifications
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod gallery_grid;
pub mod notifications;
pub mod slideshow;
pub mod styles;
pub mod theming;
